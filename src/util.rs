/**
 * File: /src/util.rs
 * Created Date: Tuesday, June 18th 2024
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 16th June 2026 9:21:07 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-06-16		Zihan	Selection helpers for the LAS alternating search
 */

use std::cmp::Ordering;

/// Approximate scalar equality with NumPy's default tolerances
/// (`|a - b| <= atol + rtol * |b|`, atol = 1e-8, rtol = 1e-5).
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}

/// Indices of `values` sorted by value, descending.
///
/// Ties resolve toward the lower index (stable sort). The "top k rows
/// by sum" selection is `order[..k]`.
pub fn argsort_desc(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[j].partial_cmp(&values[i]).unwrap_or(Ordering::Equal));
    order
}

/// Index of the first maximum of `values`.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
