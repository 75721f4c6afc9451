//! Ordinary least squares.
//!
//! The intercept is handled by centering: columns of `x` and `y` are shifted to
//! zero mean, the slope is solved on the centered system and the intercept is
//! recovered as `mean(y) - mean(x) · β`.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::error::{PricingErr, Result};

const TOLERANCES: [f64; 3] = [1e-12, 1e-10, 1e-8];

/// Fitted slope and intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub coefficients: Array1<f64>,
    pub intercept: f64,
}

/// Fits `y ≈ x · β + b` by least squares.
///
/// # Errors
/// Returns [`PricingErr::Singular`] if no finite solution can be found, which
/// includes an empty `x`.
pub fn fit(x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<Fit> {
    let (Some(x_mean), Some(y_mean)) = (x.mean_axis(Axis(0)), y.mean()) else {
        return Err(PricingErr::Singular);
    };

    let (rows, cols) = x.dim();
    let a = DMatrix::from_fn(rows, cols, |i, j| x[[i, j]] - x_mean[j]);
    let b = DVector::from_fn(rows, |i, _| y[i] - y_mean);

    let beta = solve_least_squares(a, &b).ok_or(PricingErr::Singular)?;
    let coefficients = Array1::from_iter(beta.iter().copied());
    let intercept = y_mean - x_mean.dot(&coefficients);

    if !intercept.is_finite() {
        return Err(PricingErr::Singular);
    }

    Ok(Fit {
        coefficients,
        intercept,
    })
}

/// Minimum norm least squares solution through SVD.
fn solve_least_squares(a: DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = a.svd(true, true);

    TOLERANCES.iter().find_map(|&tol| {
        svd.solve(b, tol)
            .ok()
            .filter(|beta| beta.iter().all(|v| v.is_finite()))
    })
}
