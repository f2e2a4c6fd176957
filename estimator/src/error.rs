use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used by the estimators.
pub type Result<T> = std::result::Result<T, EstimatorErr>;

/// The estimators' error type.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorErr {
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyEnsemble,
    EmptyTree {
        tree: usize,
    },
    NodeOutOfRange {
        tree: usize,
        node: usize,
        child: usize,
        len: usize,
    },
    BackwardEdge {
        tree: usize,
        node: usize,
        child: usize,
    },
    FeatureOutOfRange {
        tree: usize,
        node: usize,
        feature: usize,
        n_features: usize,
    },
    NonFiniteParameter {
        what: &'static str,
    },
}

impl Display for EstimatorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch in {what}, got {got} and expected {expected}"
            ),
            EstimatorErr::EmptyEnsemble => write!(f, "The tree ensemble has no trees"),
            EstimatorErr::EmptyTree { tree } => write!(f, "Tree {tree} has no nodes"),
            EstimatorErr::NodeOutOfRange {
                tree,
                node,
                child,
                len,
            } => write!(
                f,
                "Node {node} of tree {tree} points to node {child} but the tree only has {len} nodes"
            ),
            EstimatorErr::BackwardEdge { tree, node, child } => write!(
                f,
                "Node {node} of tree {tree} points back to node {child}, children must come after their parent"
            ),
            EstimatorErr::FeatureOutOfRange {
                tree,
                node,
                feature,
                n_features,
            } => write!(
                f,
                "Node {node} of tree {tree} splits on feature {feature} but the model only has {n_features} features"
            ),
            EstimatorErr::NonFiniteParameter { what } => {
                write!(f, "The {what} parameter is not a finite number")
            }
        }
    }
}

impl Error for EstimatorErr {}

/// Failures while reading or decoding a model artifact.
#[derive(Debug)]
pub enum ArtifactErr {
    Io(io::Error),
    Decode(serde_json::Error),
    UnsupportedFormat { got: u32, supported: u32 },
    Invalid(EstimatorErr),
}

impl Display for ArtifactErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactErr::Io(e) => write!(f, "io error: {e}"),
            ArtifactErr::Decode(e) => write!(f, "malformed artifact: {e}"),
            ArtifactErr::UnsupportedFormat { got, supported } => write!(
                f,
                "unsupported artifact format {got}, this build reads format {supported}"
            ),
            ArtifactErr::Invalid(e) => write!(f, "invalid estimator: {e}"),
        }
    }
}

impl Error for ArtifactErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactErr::Io(e) => Some(e),
            ArtifactErr::Decode(e) => Some(e),
            ArtifactErr::Invalid(e) => Some(e),
            ArtifactErr::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<io::Error> for ArtifactErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ArtifactErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<EstimatorErr> for ArtifactErr {
    fn from(value: EstimatorErr) -> Self {
        Self::Invalid(value)
    }
}
