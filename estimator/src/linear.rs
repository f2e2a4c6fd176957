use ndarray::{Array1, ArrayView2};

use crate::{
    error::{EstimatorErr, Result},
    regressor::{Regressor, check_columns},
};

/// An ordinary least squares model: `y = x · w + b`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Creates a new `LinearRegression`.
    ///
    /// # Arguments
    /// * `coefficients` - One weight per feature, in feature order.
    /// * `intercept` - The bias term.
    ///
    /// # Returns
    /// A new `LinearRegression` or an error if it has no features or a parameter isn't finite.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(EstimatorErr::SizeMismatch {
                what: "coefficients",
                got: 0,
                expected: 1,
            });
        }

        if coefficients.iter().any(|w| !w.is_finite()) {
            return Err(EstimatorErr::NonFiniteParameter {
                what: "coefficient",
            });
        }

        if !intercept.is_finite() {
            return Err(EstimatorErr::NonFiniteParameter { what: "intercept" });
        }

        Ok(Self {
            coefficients: Array1::from(coefficients),
            intercept,
        })
    }

    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        check_columns(&x, self.n_features())?;
        Ok(x.dot(&self.coefficients) + self.intercept)
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn predicts_one_value_per_row() {
        let model = LinearRegression::new(vec![0.5, 1.5, -1.0], 0.25).unwrap();
        let x = array![[2.0, -1.0, 0.5], [0.0, 0.0, 0.0]];

        let y = model.predict(x.view()).unwrap();

        // 0.5*2 + 1.5*(-1) + (-1)*0.5 + 0.25 = -0.75
        assert_eq!(y.len(), 2);
        assert!((y[0] + 0.75).abs() < 1e-12);
        assert_eq!(y[1], 0.25);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let model = LinearRegression::new(vec![1.0, 2.0], 0.0).unwrap();
        let x = array![[1.0, 2.0, 3.0]];

        let err = model.predict(x.view()).unwrap_err();
        assert_eq!(
            err,
            EstimatorErr::SizeMismatch {
                what: "input columns",
                got: 3,
                expected: 2,
            }
        );
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(LinearRegression::new(vec![], 1.0).is_err());
        assert!(LinearRegression::new(vec![f64::NAN], 1.0).is_err());
        assert!(LinearRegression::new(vec![1.0], f64::INFINITY).is_err());
    }
}
