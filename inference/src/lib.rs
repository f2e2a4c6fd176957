mod adapter;
pub mod config;
pub mod error;
pub mod feature;
mod store;
mod testing;

pub use adapter::InferenceAdapter;
pub use config::StoreConfig;
pub use error::{InferenceErr, LoadErr, Result};
pub use feature::{
    AGE_RANGE, BMI_RANGE, CHILDREN_RANGE, FEATURE_NAMES, FeatureVector, RawInput, SmokerChoice,
};
pub use store::{ArtifactSource, ModelSource, ModelStore};
