//! Small dense-matrix/vector primitives for the cohort simulator
//!
//! Cohort models are tiny (a handful of states), so this is a flat
//! row-major buffer with stride indexing rather than a numeric library.

/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Element-wise mean of two equal-length slices.
pub fn mean_of(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x + y) / 2.0).collect()
}

/// An n×n transition probability matrix, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n: usize,
    data: Vec<f64>,
}

impl TransitionMatrix {
    pub fn zeros(n: usize) -> Self {
        TransitionMatrix {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        self.data[from * self.n + to] = value;
    }

    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.n..(from + 1) * self.n]
    }

    /// Normalize each row to sum to 1. A row summing to 0 is left all-zero:
    /// cohort mass entering that state does not redistribute. That is a
    /// documented mass-conservation caveat of the model format, not
    /// something to silently repair.
    pub fn normalize_rows(&mut self) {
        for from in 0..self.n {
            let row = &mut self.data[from * self.n..(from + 1) * self.n];
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                for p in row {
                    *p /= sum;
                }
            }
        }
    }

    /// One cohort transition: `next[j] = Σ_i cohort[i] * P[i][j]`.
    pub fn propagate(&self, cohort: &[f64]) -> Vec<f64> {
        debug_assert_eq!(cohort.len(), self.n);
        let mut next = vec![0.0; self.n];
        for (from, &mass) in cohort.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for (to, p) in self.row(from).iter().enumerate() {
                next[to] += mass * p;
            }
        }
        next
    }
}
