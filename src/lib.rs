//! # las_bicluster: Large Average Submatrices biclustering
//!
//! Searches a real-valued matrix for submatrices whose entries have an
//! unusually large average relative to their size, using a significance
//! score that trades submatrix size off against average magnitude.
//!
//! ## Algorithm Overview
//!
//! Per extracted bicluster:
//! 1. **Constrained search**: random k x l restart, alternating top-k /
//!    top-l selection to a fixed point of the submatrix average
//! 2. **Size-relaxing refinement**: free both counts, climb the score
//! 3. **Deflation**: subtract the accepted average, move to the next slot
//!
//! Restarts within a slot are independent and run on the rayon pool.
//!
//! ## References
//! Shabalin, A. A., Weigman, V. J., Perou, C. M., and Nobel, A. B. (2009).
//! Finding large average submatrices in high dimensional data. The Annals
//! of Applied Statistics, 3(3): 985-1012.

/**
 * File: /src/lib.rs
 * Created Date: Monday, January 22nd 2024
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 2nd July 2026 6:32:50 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-07-02		Zihan	Reorganized around the LAS extraction pipeline
 */

pub mod bicluster;
pub mod config;
pub mod las;
pub mod matrix;
pub mod preprocess;
pub mod scoring;
pub mod search;
pub mod submatrix;
pub mod util;

pub use bicluster::{Bicluster, Biclustering};
pub use las::{Las, LasError};
pub use matrix::Matrix;
