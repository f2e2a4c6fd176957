#![cfg(test)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use estimator::{EstimatorErr, Regressor};
use ndarray::{Array1, ArrayView2};
use parking_lot::Mutex;

use crate::{error::LoadErr, store::ModelSource};

type Loader = dyn Fn() -> Result<Box<dyn Regressor>, LoadErr> + Send + Sync;

pub fn loaded<R: Regressor + 'static>(model: R) -> Result<Box<dyn Regressor>, LoadErr> {
    Ok(Box::new(model))
}

/// A source that counts how many times it was asked to load.
pub struct StubSource {
    loads: Arc<AtomicUsize>,
    make: Box<Loader>,
}

impl StubSource {
    pub fn new<F>(make: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Regressor>, LoadErr> + Send + Sync + 'static,
    {
        Self {
            loads: Arc::new(AtomicUsize::new(0)),
            make: Box::new(make),
        }
    }

    pub fn loads(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.loads)
    }
}

impl ModelSource for StubSource {
    fn describe(&self) -> String {
        "stub".to_string()
    }

    fn load(&self) -> Result<Box<dyn Regressor>, LoadErr> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        (self.make)()
    }
}

/// Predicts the same value for every row.
pub struct ConstModel(pub f64);

impl Regressor for ConstModel {
    fn n_features(&self) -> usize {
        4
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> estimator::Result<Array1<f64>> {
        Ok(Array1::from_elem(x.nrows(), self.0))
    }

    fn kind(&self) -> &'static str {
        "const"
    }
}

/// Records every row it receives and predicts the row sum.
#[derive(Clone, Default)]
pub struct RecordingModel {
    pub rows: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl Regressor for RecordingModel {
    fn n_features(&self) -> usize {
        4
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> estimator::Result<Array1<f64>> {
        let mut rows = self.rows.lock();
        rows.extend(x.rows().into_iter().map(|row| row.to_vec()));
        Ok(x.sum_axis(ndarray::Axis(1)))
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}

/// Fails its first prediction, then behaves like `ConstModel`.
pub struct FlakyModel {
    failed: AtomicBool,
    value: f64,
}

impl FlakyModel {
    pub fn new(value: f64) -> Self {
        Self {
            failed: AtomicBool::new(false),
            value,
        }
    }
}

impl Regressor for FlakyModel {
    fn n_features(&self) -> usize {
        4
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> estimator::Result<Array1<f64>> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return Err(EstimatorErr::NonFiniteParameter { what: "booster" });
        }

        Ok(Array1::from_elem(x.nrows(), self.value))
    }

    fn kind(&self) -> &'static str {
        "flaky"
    }
}

/// Returns no predictions at all.
pub struct EmptyModel;

impl Regressor for EmptyModel {
    fn n_features(&self) -> usize {
        4
    }

    fn predict(&self, _x: ArrayView2<'_, f64>) -> estimator::Result<Array1<f64>> {
        Ok(Array1::zeros(0))
    }

    fn kind(&self) -> &'static str {
        "empty"
    }
}
