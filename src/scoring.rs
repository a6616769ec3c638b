// src/scoring.rs
use crate::util::argmax;
/**
 * File: ./src/scoring.rs
 * Created Date: Monday, May 26th 2025
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 18th June 2026 4:37:55 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-06-18		Zihan	Significance score for large average submatrices
**/
use statrs::function::erf::erfc;

const SQRT_2: f64 = std::f64::consts::SQRT_2;
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// log(j!) for j = 0..=n, via the cumulative sum of log(1..n).
/// log(0!) = 0 by definition.
pub fn cum_log_factorial(n: usize) -> Vec<f64> {
    let mut log_facts = Vec::with_capacity(n + 1);
    log_facts.push(0.0);
    let mut acc = 0.0;
    for i in 1..=n {
        acc += (i as f64).ln();
        log_facts.push(acc);
    }
    log_facts
}

/// log C(n, j) for j = 0..=n.
pub fn log_combinations(n: usize) -> Vec<f64> {
    let log_facts = cum_log_factorial(n);
    (0..=n)
        .map(|j| log_facts[n] - log_facts[j] - log_facts[n - j])
        .collect()
}

/// log of the standard normal CDF, stable over the whole real line.
///
/// `Phi(x).ln()` underflows to -inf near x = -38 while the score needs
/// arguments far beyond that, so the far tail uses the Mills-ratio
/// asymptotic expansion instead of the CDF itself.
pub fn log_norm_cdf(x: f64) -> f64 {
    if x > 6.0 {
        // Phi(x) ~ 1; ln(1 - Phi(-x)) through ln_1p keeps precision
        (-0.5 * erfc(x / SQRT_2)).ln_1p()
    } else if x > -14.0 {
        (0.5 * erfc(-x / SQRT_2)).ln()
    } else {
        // ln Phi(x) = -x^2/2 - ln(-x) - ln sqrt(2 pi) + ln(series)
        let z = x * x;
        let series = 1.0 - 1.0 / z + 3.0 / z.powi(2) - 15.0 / z.powi(3) + 105.0 / z.powi(4);
        -0.5 * z - (-x).ln() - LN_SQRT_2PI + series.ln()
    }
}

/// 显著性评分器: upper-tail log-probability of a size-(k, l) average under
/// the null Gaussian model, penalized by the number of ways to choose a
/// submatrix of that size.
///
/// Holds the log C(n, j) tables for one matrix shape; rebuild per
/// extraction call.
pub struct SignificanceScorer {
    row_log_combs: Vec<f64>,
    col_log_combs: Vec<f64>,
}

impl SignificanceScorer {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            row_log_combs: log_combinations(num_rows),
            col_log_combs: log_combinations(num_cols),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.row_log_combs.len() - 1
    }

    pub fn num_cols(&self) -> usize {
        self.col_log_combs.len() - 1
    }

    /// score(k, l, avg) = -ln Phi(-avg sqrt(kl)) - ln C(n, k) - ln C(m, l)
    pub fn score(&self, rows: usize, cols: usize, avg: f64) -> f64 {
        let area = (rows * cols) as f64;
        -log_norm_cdf(-avg * area.sqrt()) - self.row_log_combs[rows] - self.col_log_combs[cols]
    }

    /// Scores for every candidate row count 1..=num_rows, given `cols`
    /// fixed columns and the prefix sums of the per-row restricted sums in
    /// decreasing order. `cumsum[j - 1]` is the total over the best j rows.
    pub fn row_count_scores(&self, cols: usize, cumsum: &[f64]) -> Vec<f64> {
        Self::count_scores(&self.row_log_combs, self.col_log_combs[cols], cols, cumsum)
    }

    /// Symmetric to [`Self::row_count_scores`], scanning column counts with
    /// `rows` fixed rows.
    pub fn col_count_scores(&self, rows: usize, cumsum: &[f64]) -> Vec<f64> {
        Self::count_scores(&self.col_log_combs, self.row_log_combs[rows], rows, cumsum)
    }

    /// Count that maximizes the batch score (first maximum), 1-based.
    pub fn best_count(scores: &[f64]) -> usize {
        argmax(scores) + 1
    }

    // count 0 carries no entry in `cumsum`, so the zero-size bicluster is
    // excluded by construction
    fn count_scores(
        count_log_combs: &[f64],
        fixed_log_comb: f64,
        fixed: usize,
        cumsum: &[f64],
    ) -> Vec<f64> {
        cumsum
            .iter()
            .enumerate()
            .map(|(i, &total)| {
                let count = i + 1;
                let area = (count * fixed) as f64;
                let avg = total / area;
                -log_norm_cdf(-avg * area.sqrt()) - count_log_combs[count] - fixed_log_comb
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cum_log_factorial() {
        let log_facts = cum_log_factorial(4);
        assert_eq!(log_facts.len(), 5);
        assert_eq!(log_facts[0], 0.0);
        assert_eq!(log_facts[1], 0.0);
        assert!((log_facts[3] - 6.0_f64.ln()).abs() < 1e-12);
        assert!((log_facts[4] - 24.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_log_combinations_values() {
        let combs = log_combinations(5);
        assert_eq!(combs.len(), 6);
        assert!((combs[0]).abs() < 1e-12);
        assert!((combs[2] - 10.0_f64.ln()).abs() < 1e-12);
        assert!((combs[5]).abs() < 1e-12);
    }

    #[test]
    fn test_log_combinations_symmetry() {
        for n in [1usize, 3, 10, 57] {
            let combs = log_combinations(n);
            for j in 0..=n {
                assert!(
                    (combs[j] - combs[n - j]).abs() < 1e-9,
                    "log C({}, {}) != log C({}, {})",
                    n,
                    j,
                    n,
                    n - j
                );
            }
        }
    }

    #[test]
    fn test_log_norm_cdf_at_zero() {
        assert!((log_norm_cdf(0.0) - 0.5_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_log_norm_cdf_moderate_range() {
        // against direct evaluation where the CDF is representable
        for &x in &[-8.0, -3.0, -1.0, 0.5, 2.0, 5.0] {
            let direct = (0.5 * erfc(-x / SQRT_2)).ln();
            assert!(
                (log_norm_cdf(x) - direct).abs() < 1e-10,
                "mismatch at x = {}",
                x
            );
        }
    }

    #[test]
    fn test_log_norm_cdf_far_tail() {
        // scipy.stats.norm.logcdf(-20.0) = -203.917155...
        assert!((log_norm_cdf(-20.0) - (-203.917_155)).abs() < 1e-3);

        // stays finite where a naive ln(cdf) is -inf
        let deep = log_norm_cdf(-200.0);
        assert!(deep.is_finite());
        assert!(deep < -19_000.0);
    }

    #[test]
    fn test_log_norm_cdf_monotone() {
        let xs = [-50.0, -14.5, -13.9, -5.0, 0.0, 5.9, 6.1, 10.0];
        for pair in xs.windows(2) {
            assert!(log_norm_cdf(pair[0]) < log_norm_cdf(pair[1]));
        }
    }

    #[test]
    fn test_score_at_zero_average() {
        let scorer = SignificanceScorer::new(20, 30);
        assert_eq!(scorer.num_rows(), 20);
        assert_eq!(scorer.num_cols(), 30);
        let combs_rows = log_combinations(20);
        let combs_cols = log_combinations(30);

        // tail probability at 0 is exactly 1/2
        let expected = -0.5_f64.ln() - combs_rows[4] - combs_cols[7];
        assert!((scorer.score(4, 7, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_score_increases_with_average() {
        let scorer = SignificanceScorer::new(50, 50);
        let low = scorer.score(5, 5, 0.5);
        let high = scorer.score(5, 5, 3.0);
        assert!(high > low);
    }

    #[test]
    fn test_batch_scores_match_scalar() {
        let scorer = SignificanceScorer::new(6, 9);
        // per-row sums over 4 fixed columns, already in decreasing order
        let sums = [8.0, 5.0, 3.0, 1.0, -2.0, -4.0];
        let mut cumsum = Vec::new();
        let mut acc = 0.0;
        for s in sums {
            acc += s;
            cumsum.push(acc);
        }

        let batch = scorer.row_count_scores(4, &cumsum);
        assert_eq!(batch.len(), 6);
        for (i, &batch_score) in batch.iter().enumerate() {
            let count = i + 1;
            let avg = cumsum[i] / (count * 4) as f64;
            let scalar = scorer.score(count, 4, avg);
            assert!((batch_score - scalar).abs() < 1e-10);
        }
    }

    #[test]
    fn test_best_count_is_first_maximum() {
        assert_eq!(SignificanceScorer::best_count(&[1.0, 4.0, 4.0, 2.0]), 2);
        assert_eq!(SignificanceScorer::best_count(&[3.0]), 1);
    }
}
