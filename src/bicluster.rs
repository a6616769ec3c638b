//! # Bicluster result model
//!
//! A bicluster is a pair of row/column index sets into the data matrix.
//! `Biclustering` is the ordered collection an extraction run produces,
//! immutable after construction (index 0 = first accepted, which is the
//! highest-scoring candidate of its slot).

/**
 * File: /src/bicluster.rs
 * Created Date: Wednesday, June 17th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 17th June 2026 3:12:40 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-06-17		Zihan	Result container for LAS extraction
 */

use crate::submatrix::Submatrix;
use ndarray::Array2;

/// Row/column index subsets identifying a submatrix of the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bicluster {
    /// Row indices in the original matrix
    pub row_indices: Vec<usize>,
    /// Column indices in the original matrix
    pub col_indices: Vec<usize>,
}

impl Bicluster {
    pub fn new(row_indices: Vec<usize>, col_indices: Vec<usize>) -> Self {
        Self {
            row_indices,
            col_indices,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.row_indices.len(), self.col_indices.len())
    }

    /// |rows| x |cols|; >= 1 for any bicluster the search emits.
    pub fn area(&self) -> usize {
        self.row_indices.len() * self.col_indices.len()
    }

    /// Borrowed view of this bicluster's entries in `data`. `None` if the
    /// index sets do not fit `data`.
    pub fn submatrix<'a>(&self, data: &'a Array2<f64>) -> Option<Submatrix<'a, f64>> {
        Submatrix::from_indices(data, &self.row_indices, &self.col_indices)
    }
}

/// Ordered collection of accepted biclusters (discovery order).
#[derive(Debug, Clone, Default)]
pub struct Biclustering {
    biclusters: Vec<Bicluster>,
}

impl Biclustering {
    pub fn new(biclusters: Vec<Bicluster>) -> Self {
        Self { biclusters }
    }

    pub fn len(&self) -> usize {
        self.biclusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biclusters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bicluster> {
        self.biclusters.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bicluster> {
        self.biclusters.iter()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!("Found {} biclusters", self.biclusters.len());

        for (i, bicluster) in self.biclusters.iter().take(5).enumerate() {
            let (rows, cols) = bicluster.size();
            summary.push_str(&format!("\n  #{}: {}x{} submatrix", i + 1, rows, cols));
        }

        if self.biclusters.len() > 5 {
            summary.push_str(&format!("\n  ... and {} more", self.biclusters.len() - 5));
        }

        summary
    }
}

impl<'b> IntoIterator for &'b Biclustering {
    type Item = &'b Bicluster;
    type IntoIter = std::slice::Iter<'b, Bicluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.biclusters.iter()
    }
}
