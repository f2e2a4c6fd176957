use ndarray::{Array1, ArrayView2};

use crate::error::{EstimatorErr, Result};

/// A trained regression model, ready to be queried.
///
/// Implementations are immutable once built so a single instance can be shared between threads
/// and queried concurrently.
pub trait Regressor: Send + Sync {
    /// Returns the amount of features each input row must have.
    fn n_features(&self) -> usize;

    /// Computes one prediction per row of `x`.
    ///
    /// # Arguments
    /// * `x` - The input batch, one sample per row and `n_features` columns.
    ///
    /// # Returns
    /// The predictions in row order or an error if the batch doesn't fit the model.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>>;

    /// A short name for the estimator family, used in logs.
    fn kind(&self) -> &'static str;
}

/// Checks that the batch has as many columns as the model has features.
///
/// # Arguments
/// * `x` - The input batch.
/// * `n_features` - The expected amount of columns.
///
/// # Returns
/// An error if the shapes don't agree.
pub(crate) fn check_columns(x: &ArrayView2<'_, f64>, n_features: usize) -> Result<()> {
    if x.ncols() != n_features {
        return Err(EstimatorErr::SizeMismatch {
            what: "input columns",
            got: x.ncols(),
            expected: n_features,
        });
    }

    Ok(())
}
