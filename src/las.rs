//! # Large Average Submatrices (LAS)
//!
//! Greedy multi-bicluster extraction: per slot, many independent randomized
//! search attempts on the current working matrix, keep the best-scoring
//! candidate, deflate its average out of the matrix, repeat. Stops early
//! when a slot's best score falls below the threshold.
//!
//! ## References
//! Shabalin, A. A., Weigman, V. J., Perou, C. M., and Nobel, A. B. (2009).
//! Finding large average submatrices in high dimensional data. The Annals
//! of Applied Statistics, 3(3): 985-1012.

/**
 * File: /src/las.rs
 * Created Date: Thursday, June 25th 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 2nd July 2026 6:05:17 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-06-25		Zihan	Extraction loop with deflation and early stop
 */

use std::error::Error;
use std::fmt;

use log::info;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bicluster::Biclustering;
use crate::matrix::Matrix;
use crate::preprocess;
use crate::scoring::SignificanceScorer;
use crate::search::{self, Candidate};

/// LAS configuration and entry point.
///
/// Defaults follow the reference parameterization; setters chain in the
/// builder style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Las {
    /// Maximum number of biclusters to extract
    pub num_biclusters: usize,
    /// Minimum significance score a slot's best candidate must reach
    pub score_threshold: f64,
    /// Independent randomized search attempts per slot
    pub randomized_searches: usize,
    /// Apply sign(x) * ln(1 + |x|) before searching (heavy-tailed data)
    pub transform: bool,
    /// Fan the attempts of one slot out over the rayon pool
    pub parallel: bool,
    /// Pin the base seed for reproducible runs; `None` draws fresh entropy
    pub seed: Option<u64>,
}

impl Default for Las {
    fn default() -> Self {
        Self {
            num_biclusters: 10,
            score_threshold: 1.0,
            randomized_searches: 1000,
            transform: false,
            parallel: true,
            seed: None,
        }
    }
}

impl Las {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_biclusters(mut self, num_biclusters: usize) -> Self {
        self.num_biclusters = num_biclusters;
        self
    }

    pub fn score_threshold(mut self, score_threshold: f64) -> Self {
        self.score_threshold = score_threshold;
        self
    }

    pub fn randomized_searches(mut self, randomized_searches: usize) -> Self {
        self.randomized_searches = randomized_searches;
        self
    }

    pub fn transform(mut self, transform: bool) -> Self {
        self.transform = transform;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Compute the biclustering of `matrix`.
    ///
    /// Validates the configuration, standardizes a working copy, then runs
    /// the extraction loop. The caller's matrix is untouched; deflation
    /// happens on the working copy only.
    pub fn run(&self, matrix: &Matrix<f64>) -> Result<Biclustering, LasError> {
        self.validate()?;

        let mut data = matrix.data.clone();
        preprocess::standardize(&mut data);
        if self.transform {
            preprocess::variance_stabilize(&mut data);
        }

        // constant across slots: dimensions never shrink, rows/cols are
        // only masked by index
        let scorer = SignificanceScorer::new(data.nrows(), data.ncols());
        let base_seed = match self.seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };

        let mut biclusters = Vec::new();

        for slot in 0..self.num_biclusters {
            let best = match self.best_of_restarts(&data, &scorer, base_seed, slot) {
                Some(candidate) => candidate,
                None => break,
            };

            if best.score < self.score_threshold {
                info!(
                    "slot {}: best score {:.4} below threshold {:.4}, stopping",
                    slot, best.score, self.score_threshold
                );
                break;
            }

            let (rows, cols) = best.bicluster.size();
            info!(
                "slot {}: accepted {}x{} bicluster (avg {:.4}, score {:.4})",
                slot, rows, cols, best.avg, best.score
            );

            // deflation: remove this pattern's contribution so the next
            // slot finds different structure
            for &r in &best.bicluster.row_indices {
                for &c in &best.bicluster.col_indices {
                    data[[r, c]] -= best.avg;
                }
            }
            biclusters.push(best.bicluster);
        }

        Ok(Biclustering::new(biclusters))
    }

    /// Best candidate over `randomized_searches` independent attempts for
    /// one slot. The earliest attempt wins ties (stable max in attempt
    /// order), whether or not the attempts ran in parallel.
    fn best_of_restarts(
        &self,
        data: &Array2<f64>,
        scorer: &SignificanceScorer,
        base_seed: u64,
        slot: usize,
    ) -> Option<Candidate> {
        let attempt = |i: usize| {
            let mut rng = StdRng::seed_from_u64(attempt_seed(base_seed, slot, i));
            search::find_bicluster(data, scorer, &mut rng)
        };

        let candidates: Vec<Candidate> = if self.parallel {
            (0..self.randomized_searches)
                .into_par_iter()
                .map(attempt)
                .collect()
        } else {
            (0..self.randomized_searches).map(attempt).collect()
        };

        candidates
            .into_iter()
            .reduce(|best, c| if c.score > best.score { c } else { best })
    }

    fn validate(&self) -> Result<(), LasError> {
        if self.num_biclusters == 0 {
            return Err(LasError::InvalidParameter(
                "'num_biclusters' must be greater than zero".to_string(),
            ));
        }
        if self.randomized_searches == 0 {
            return Err(LasError::InvalidParameter(
                "'randomized_searches' must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Distinct RNG stream per (slot, attempt), so parallel and sequential
/// execution visit identical streams.
fn attempt_seed(base: u64, slot: usize, attempt: usize) -> u64 {
    base.wrapping_add((slot as u64) << 32)
        .wrapping_add(attempt as u64)
}

/// Errors reported before any search work starts.
#[derive(Debug)]
pub enum LasError {
    InvalidParameter(String),
}

impl fmt::Display for LasError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LasError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
        }
    }
}

impl Error for LasError {}
