pub mod artifact;
pub mod error;
mod linear;
mod regressor;
mod tree;

pub use artifact::{Artifact, EstimatorSpec, FORMAT_VERSION, NodeSpec};
pub use error::{ArtifactErr, EstimatorErr, Result};
pub use linear::LinearRegression;
pub use regressor::Regressor;
pub use tree::{Node, TreeEnsemble};
