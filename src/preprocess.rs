//! # Preprocessing
//!
//! One-time transforms applied to the working copy of the data before the
//! extraction loop starts: global per-column standardization and the
//! optional variance-stabilizing transform for heavy-tailed data.

/**
 * File: /src/preprocess.rs
 * Created Date: Monday, June 22nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 22nd June 2026 10:14:33 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-06-22		Zihan	Column standardization + log transform for LAS
 */

use ndarray::{Array2, Axis};

/// Standardize each column to zero mean / unit variance (biased variance).
///
/// A zero-variance column is centered only; scaling it would divide by
/// zero and push non-finite values into the score.
pub fn standardize(data: &mut Array2<f64>) {
    let n = data.nrows();
    if n == 0 {
        return;
    }

    for mut column in data.axis_iter_mut(Axis(1)) {
        let mean = column.sum() / n as f64;
        let var = column.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        let std = var.sqrt();
        let scale = if std < 1e-30 { 1.0 } else { std };
        column.mapv_inplace(|v| (v - mean) / scale);
    }
}

/// f(x) = sign(x) * ln(1 + |x|) elementwise, then re-standardize.
///
/// Recommended by the LAS authors for heavy-tailed data.
pub fn variance_stabilize(data: &mut Array2<f64>) {
    data.mapv_inplace(|v| v.signum() * v.abs().ln_1p());
    standardize(data);
}
