//! The on-disk representation of a trained estimator.
//!
//! Artifacts are JSON documents so that a model trained elsewhere can be re-exported as plain
//! coefficients or as a tree dump:
//!
//! ```json
//! {
//!   "format": 1,
//!   "features": ["age", "bmi", "smoker", "children"],
//!   "estimator": { "kind": "linear", "coefficients": [257.8, 321.8, 23811.4, 473.5], "intercept": -12102.8 }
//! }
//! ```

use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::ArtifactErr,
    linear::LinearRegression,
    regressor::Regressor,
    tree::{Node, TreeEnsemble},
};

/// The only artifact layout this build understands.
pub const FORMAT_VERSION: u32 = 1;

/// A decoded model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub format: u32,
    /// The feature names in the column order the estimator was trained on, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    pub estimator: EstimatorSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimatorSpec {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    TreeEnsemble {
        base_score: f64,
        n_features: usize,
        trees: Vec<Vec<NodeSpec>>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
        /// Defaults to `yes` when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        missing: Option<usize>,
    },
    Leaf {
        leaf: f64,
    },
}

impl From<NodeSpec> for Node {
    fn from(value: NodeSpec) -> Self {
        match value {
            NodeSpec::Split {
                feature,
                threshold,
                yes,
                no,
                missing,
            } => Node::Split {
                feature,
                threshold,
                yes,
                no,
                missing: missing.unwrap_or(yes),
            },
            NodeSpec::Leaf { leaf } => Node::Leaf { value: leaf },
        }
    }
}

impl Artifact {
    /// Reads and decodes the artifact stored at `path`.
    ///
    /// # Arguments
    /// * `path` - The location of the artifact file.
    ///
    /// # Returns
    /// The decoded artifact or an error if the file can't be read or decoded.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactErr> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!("read {} bytes of artifact from {}", bytes.len(), path.display());
        Self::from_slice(&bytes)
    }

    /// Decodes an artifact from its raw bytes.
    ///
    /// # Arguments
    /// * `bytes` - The serialized artifact.
    ///
    /// # Returns
    /// The decoded artifact or an error if it's malformed or of an unknown format.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ArtifactErr> {
        let artifact: Self = serde_json::from_slice(bytes)?;

        if artifact.format != FORMAT_VERSION {
            return Err(ArtifactErr::UnsupportedFormat {
                got: artifact.format,
                supported: FORMAT_VERSION,
            });
        }

        Ok(artifact)
    }

    /// Builds the estimator described by this artifact.
    ///
    /// # Returns
    /// A ready to use regressor or an error if the parameters are inconsistent.
    pub fn into_regressor(self) -> Result<Box<dyn Regressor>, ArtifactErr> {
        let regressor: Box<dyn Regressor> = match self.estimator {
            EstimatorSpec::Linear {
                coefficients,
                intercept,
            } => Box::new(LinearRegression::new(coefficients, intercept)?),
            EstimatorSpec::TreeEnsemble {
                base_score,
                n_features,
                trees,
            } => {
                let trees = trees
                    .into_iter()
                    .map(|nodes| nodes.into_iter().map(Node::from).collect())
                    .collect();

                Box::new(TreeEnsemble::new(base_score, n_features, trees)?)
            }
        };

        Ok(regressor)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    const LINEAR: &str = r#"{
        "format": 1,
        "features": ["a", "b"],
        "estimator": { "kind": "linear", "coefficients": [2.0, -1.0], "intercept": 0.5 }
    }"#;

    const TREES: &str = r#"{
        "format": 1,
        "estimator": {
            "kind": "tree_ensemble",
            "base_score": 10.0,
            "n_features": 1,
            "trees": [[
                { "feature": 0, "threshold": 2.0, "yes": 1, "no": 2 },
                { "leaf": -1.0 },
                { "leaf": 1.0 }
            ]]
        }
    }"#;

    #[test]
    fn decodes_linear_artifact() {
        let artifact = Artifact::from_slice(LINEAR.as_bytes()).unwrap();
        assert_eq!(
            artifact.features,
            Some(vec!["a".to_string(), "b".to_string()])
        );

        let model = artifact.into_regressor().unwrap();
        assert_eq!(model.kind(), "linear");
        assert_eq!(model.n_features(), 2);
        assert_eq!(model.predict(array![[1.0, 1.0]].view()).unwrap(), array![1.5]);
    }

    #[test]
    fn decodes_tree_artifact_with_default_missing_branch() {
        let artifact = Artifact::from_slice(TREES.as_bytes()).unwrap();
        assert!(artifact.features.is_none());

        let model = artifact.into_regressor().unwrap();
        let y = model.predict(array![[1.0], [3.0], [f64::NAN]].view()).unwrap();

        assert_eq!(y, array![9.0, 11.0, 9.0]);
    }

    #[test]
    fn rejects_unknown_format() {
        let raw = LINEAR.replace("\"format\": 1", "\"format\": 7");

        assert!(matches!(
            Artifact::from_slice(raw.as_bytes()),
            Err(ArtifactErr::UnsupportedFormat { got: 7, supported: 1 })
        ));
    }

    #[test]
    fn rejects_unknown_kind_and_garbage() {
        let raw = LINEAR.replace("\"linear\"", "\"neural\"");
        assert!(matches!(
            Artifact::from_slice(raw.as_bytes()),
            Err(ArtifactErr::Decode(_))
        ));

        assert!(matches!(
            Artifact::from_slice(b"\x80\x04\x95pickle"),
            Err(ArtifactErr::Decode(_))
        ));
    }

    #[test]
    fn inconsistent_parameters_surface_as_invalid() {
        let raw = r#"{ "format": 1, "estimator": { "kind": "linear", "coefficients": [], "intercept": 0.0 } }"#;
        let artifact = Artifact::from_slice(raw.as_bytes()).unwrap();

        assert!(matches!(
            artifact.into_regressor(),
            Err(ArtifactErr::Invalid(_))
        ));
    }
}
