use std::{error::Error, fmt};

use estimator::ArtifactErr;

/// The inference module's result type.
pub type Result<T> = std::result::Result<T, InferenceErr>;

/// Every outcome of a premium request that isn't a premium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceErr {
    /// The artifact could not be located or decoded. Sticks for the whole process lifetime.
    ModelUnavailable { reason: String },
    /// The loaded model failed on this request. The next request may still succeed.
    PredictionFailed { cause: String },
}

impl InferenceErr {
    pub(crate) fn prediction_failed<S: Into<String>>(cause: S) -> Self {
        Self::PredictionFailed {
            cause: cause.into(),
        }
    }

    /// Whether the presentation layer should stop offering predictions altogether.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::ModelUnavailable { .. })
    }
}

impl fmt::Display for InferenceErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelUnavailable { reason } => write!(f, "model unavailable: {reason}"),
            Self::PredictionFailed { cause } => write!(f, "prediction failed: {cause}"),
        }
    }
}

impl Error for InferenceErr {}

/// Failures a [`ModelSource`](crate::ModelSource) may report while loading.
#[derive(Debug)]
pub enum LoadErr {
    Artifact(ArtifactErr),
    /// The artifact records a feature order different from the one the encoder produces.
    FeatureOrder { got: Vec<String> },
}

impl fmt::Display for LoadErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact(e) => write!(f, "{e}"),
            Self::FeatureOrder { got } => write!(
                f,
                "the artifact was trained on features {got:?}, expected {:?}",
                crate::feature::FEATURE_NAMES
            ),
        }
    }
}

impl Error for LoadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Artifact(e) => Some(e),
            Self::FeatureOrder { .. } => None,
        }
    }
}

impl From<ArtifactErr> for LoadErr {
    fn from(value: ArtifactErr) -> Self {
        Self::Artifact(value)
    }
}

/// Boundary conversion: a failed load is reported to callers as an unavailable model.
impl From<LoadErr> for InferenceErr {
    fn from(value: LoadErr) -> Self {
        Self::ModelUnavailable {
            reason: value.to_string(),
        }
    }
}
