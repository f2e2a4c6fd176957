use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
};

use estimator::{Artifact, Regressor};
use log::{info, warn};

use crate::{
    config::StoreConfig,
    error::{InferenceErr, LoadErr, Result},
    feature::FEATURE_NAMES,
};

/// Somewhere a trained model can be loaded from.
pub trait ModelSource: Send + Sync {
    /// A human readable location, used in logs.
    fn describe(&self) -> String;

    /// Loads and deserializes the model.
    fn load(&self) -> std::result::Result<Box<dyn Regressor>, LoadErr>;
}

/// A model serialized as an [`Artifact`] file.
#[derive(Debug, Clone)]
pub struct ArtifactSource {
    path: PathBuf,
}

impl ArtifactSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ModelSource for ArtifactSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> std::result::Result<Box<dyn Regressor>, LoadErr> {
        let artifact = Artifact::read(&self.path)?;

        if let Some(features) = &artifact.features {
            if !features.iter().map(String::as_str).eq(FEATURE_NAMES) {
                return Err(LoadErr::FeatureOrder {
                    got: features.clone(),
                });
            }
        }

        Ok(artifact.into_regressor()?)
    }
}

/// Owns the single trained model of the process.
///
/// The model is loaded on the first call to [`ModelStore::get_model`] and the outcome of that
/// attempt, success or failure, is kept for the lifetime of the store. Concurrent first callers
/// wait for the one load in flight instead of starting their own.
pub struct ModelStore {
    source: Box<dyn ModelSource>,
    model: OnceLock<Result<Arc<dyn Regressor>>>,
}

impl ModelStore {
    /// Creates a new `ModelStore`. Nothing is read until the model is first requested.
    ///
    /// # Arguments
    /// * `source` - Where the model will be loaded from.
    ///
    /// # Returns
    /// A new `ModelStore` instance.
    pub fn new<S: ModelSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            model: OnceLock::new(),
        }
    }

    /// Creates a store backed by the artifact file named in `cfg`.
    pub fn from_config(cfg: &StoreConfig) -> Self {
        Self::new(ArtifactSource::new(cfg.artifact_path()))
    }

    /// Returns the shared model handle, loading it if this is the first request.
    ///
    /// # Returns
    /// The model or `ModelUnavailable` if it could not be loaded, now or on the first attempt.
    pub fn get_model(&self) -> Result<Arc<dyn Regressor>> {
        self.model.get_or_init(|| self.load()).clone()
    }

    /// Loads the model eagerly so failures show up before the first request.
    pub fn warm_up(&self) -> Result<()> {
        self.get_model().map(|_| ())
    }

    /// Whether a load has already been attempted.
    pub fn is_initialized(&self) -> bool {
        self.model.get().is_some()
    }

    fn load(&self) -> Result<Arc<dyn Regressor>> {
        let location = self.source.describe();
        info!("loading model from {location}");

        match self.source.load() {
            Ok(model) => {
                info!(
                    "loaded {} model with {} features",
                    model.kind(),
                    model.n_features()
                );
                Ok(Arc::from(model))
            }
            Err(e) => {
                warn!("unable to load the model from {location}: {e}");
                Err(InferenceErr::from(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io, sync::atomic::Ordering, thread, time::Duration};

    use estimator::ArtifactErr;

    use super::*;
    use crate::testing::{ConstModel, StubSource, loaded};

    fn not_found() -> LoadErr {
        LoadErr::Artifact(ArtifactErr::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file",
        )))
    }

    #[test]
    fn loads_lazily_and_only_once() {
        let source = StubSource::new(|| loaded(ConstModel(1.0)));
        let loads = source.loads();
        let store = ModelStore::new(source);

        assert!(!store.is_initialized());
        assert_eq!(loads.load(Ordering::SeqCst), 0);

        let a = store.get_model().unwrap();
        let b = store.get_model().unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(store.is_initialized());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_load_is_not_retried() {
        let source = StubSource::new(|| Err(not_found()));
        let loads = source.loads();
        let store = ModelStore::new(source);

        for _ in 0..5 {
            let err = store.get_model().err().unwrap();
            assert!(matches!(err, InferenceErr::ModelUnavailable { .. }));
            assert!(err.is_blocking());
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_first_requests_share_one_load() {
        let source = StubSource::new(|| {
            thread::sleep(Duration::from_millis(20));
            loaded(ConstModel(3.0))
        });
        let loads = source.loads();
        let store = ModelStore::new(source);

        thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| assert!(store.get_model().is_ok()));
            }
        });

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn warm_up_reports_the_load_outcome() {
        let ok = ModelStore::new(StubSource::new(|| loaded(ConstModel(0.0))));
        assert!(ok.warm_up().is_ok());

        let broken = ModelStore::new(StubSource::new(|| Err(not_found())));
        let err = broken.warm_up().unwrap_err();
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn missing_artifact_file_is_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ModelStore::from_config(&StoreConfig::new(tmp.path().join("missing.json")));

        assert!(matches!(
            store.get_model(),
            Err(InferenceErr::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn artifact_with_another_feature_order_is_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("insurancemodel.json");
        fs::write(
            &path,
            r#"{
                "format": 1,
                "features": ["age", "smoker", "bmi", "children"],
                "estimator": { "kind": "linear", "coefficients": [1, 1, 1, 1], "intercept": 0 }
            }"#,
        )
        .unwrap();

        let err = ModelStore::new(ArtifactSource::new(&path))
            .get_model()
            .err()
            .unwrap();

        match err {
            InferenceErr::ModelUnavailable { reason } => assert!(reason.contains("trained on features")),
            other => panic!("expected ModelUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn artifact_in_feature_order_loads() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("insurancemodel.json");
        fs::write(
            &path,
            r#"{
                "format": 1,
                "features": ["age", "bmi", "smoker", "children"],
                "estimator": { "kind": "linear", "coefficients": [1, 1, 1, 1], "intercept": 0 }
            }"#,
        )
        .unwrap();

        let model = ModelStore::new(ArtifactSource::new(&path)).get_model().unwrap();
        assert_eq!(model.kind(), "linear");
        assert_eq!(model.n_features(), 4);
    }
}
