use log::debug;

use super::component::Component;
use crate::error::{LabError, LabResult};
use crate::settings::MatrixSettings;

/// row-major dense matrix
pub type Matrix = Vec<Vec<f64>>;

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixAccelerator {
    name: String,
    base_latency: f64,
    cost_per_op: f64,
}

impl Component for MatrixAccelerator {
    fn name(&self) -> &str {
        &self.name
    }
}

impl MatrixAccelerator {
    pub fn new(settings: &MatrixSettings) -> MatrixAccelerator {
        MatrixAccelerator {
            name: settings.name.clone(),
            base_latency: settings.base_latency,
            cost_per_op: settings.cost_per_op,
        }
    }

    /// # Description
    /// - multiply a square matrix by a vector
    /// - latency is `base + cost_per_op * n * n`
    /// # Return
    /// the product and its latency, or a shape mismatch when the matrix is not
    /// `n x n` for a vector of length `n`
    pub fn run(&self, matrix: &Matrix, vector: &[f64]) -> LabResult<(Vec<f64>, f64)> {
        let n = vector.len();
        if let Some(row) = matrix.iter().find(|row| row.len() != n) {
            return Err(LabError::ShapeMismatch {
                rows: matrix.len(),
                cols: row.len(),
                vector_len: n,
            });
        }
        if matrix.len() != n {
            return Err(LabError::ShapeMismatch {
                rows: matrix.len(),
                cols: n,
                vector_len: n,
            });
        }

        let output = matrix
            .iter()
            .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum())
            .collect();
        let latency = self.base_latency + self.cost_per_op * (n * n) as f64;
        debug!("{}: {}x{} multiply, latency {}", self.name, n, n, latency);
        Ok((output, latency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply() {
        let accel = MatrixAccelerator::new(&MatrixSettings::default());
        let matrix = vec![vec![1.0, 0.5], vec![0.0, 1.0]];
        let (y, latency) = accel.run(&matrix, &[1.0, 2.0]).unwrap();
        assert_eq!(y, vec![2.0, 2.0]);
        assert!((latency - (1.0 + 0.001 * 4.0)).abs() < 1e-12);
    }

    #[test]
    fn test_output_length_follows_vector() {
        let accel = MatrixAccelerator::new(&MatrixSettings::default());
        for n in 0..6 {
            let matrix = vec![vec![1.0; n]; n];
            let (y, _) = accel.run(&matrix, &vec![1.0; n]).unwrap();
            assert_eq!(y.len(), n);
            assert!(y.iter().all(|v| *v == n as f64));
        }
    }

    #[test]
    fn test_empty_is_base_latency() {
        let accel = MatrixAccelerator::new(&MatrixSettings::default());
        let (y, latency) = accel.run(&vec![], &[]).unwrap();
        assert!(y.is_empty());
        assert_eq!(latency, 1.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let accel = MatrixAccelerator::new(&MatrixSettings::default());
        // wrong row width
        let matrix = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert!(matches!(
            accel.run(&matrix, &[1.0, 2.0]),
            Err(LabError::ShapeMismatch {
                rows: 2,
                cols: 3,
                vector_len: 2
            })
        ));
        // not square
        let matrix = vec![vec![1.0, 2.0]];
        assert!(matches!(
            accel.run(&matrix, &[1.0, 2.0]),
            Err(LabError::ShapeMismatch { rows: 1, .. })
        ));
    }
}
