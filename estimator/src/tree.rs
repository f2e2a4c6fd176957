use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::{
    error::{EstimatorErr, Result},
    regressor::{Regressor, check_columns},
};

/// A single node of a regression tree.
///
/// Splits follow the gradient boosting dump convention: a sample goes to `yes` when its feature
/// value is strictly lower than `threshold`, to `no` otherwise and to `missing` when the value
/// is NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
        missing: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A regression tree stored as a flat list of nodes, the root being the first one.
#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Validates the node list and wraps it.
    ///
    /// Every child index must point forward, which rules out cycles and guarantees that the
    /// traversal in `Tree::eval` always reaches a leaf.
    fn new(tree: usize, nodes: Vec<Node>, n_features: usize) -> Result<Self> {
        if nodes.is_empty() {
            return Err(EstimatorErr::EmptyTree { tree });
        }

        let len = nodes.len();
        for (node, n) in nodes.iter().enumerate() {
            match *n {
                Node::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    if feature >= n_features {
                        return Err(EstimatorErr::FeatureOutOfRange {
                            tree,
                            node,
                            feature,
                            n_features,
                        });
                    }

                    if !threshold.is_finite() {
                        return Err(EstimatorErr::NonFiniteParameter { what: "threshold" });
                    }

                    for child in [yes, no, missing] {
                        if child >= len {
                            return Err(EstimatorErr::NodeOutOfRange {
                                tree,
                                node,
                                child,
                                len,
                            });
                        }

                        if child <= node {
                            return Err(EstimatorErr::BackwardEdge { tree, node, child });
                        }
                    }
                }
                Node::Leaf { value } if !value.is_finite() => {
                    return Err(EstimatorErr::NonFiniteParameter { what: "leaf value" });
                }
                Node::Leaf { .. } => {}
            }
        }

        Ok(Self { nodes })
    }

    fn eval(&self, row: ArrayView1<'_, f64>) -> f64 {
        let mut idx = 0;

        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    let v = row[feature];
                    idx = if v.is_nan() {
                        missing
                    } else if v < threshold {
                        yes
                    } else {
                        no
                    };
                }
            }
        }
    }
}

/// An additive ensemble of regression trees, as produced by gradient boosting.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    base_score: f64,
    n_features: usize,
    trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Creates a new `TreeEnsemble`.
    ///
    /// # Arguments
    /// * `base_score` - The constant every prediction starts from.
    /// * `n_features` - The amount of features the trees were grown on.
    /// * `trees` - The node lists of each tree.
    ///
    /// # Returns
    /// A new `TreeEnsemble` or an error if any tree is malformed.
    pub fn new(base_score: f64, n_features: usize, trees: Vec<Vec<Node>>) -> Result<Self> {
        if !base_score.is_finite() {
            return Err(EstimatorErr::NonFiniteParameter { what: "base score" });
        }

        if trees.is_empty() {
            return Err(EstimatorErr::EmptyEnsemble);
        }

        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(i, nodes)| Tree::new(i, nodes, n_features))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            base_score,
            n_features,
            trees,
        })
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for TreeEnsemble {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        check_columns(&x, self.n_features)?;

        let y = x
            .rows()
            .into_iter()
            .map(|row| {
                self.base_score + self.trees.iter().map(|tree| tree.eval(row)).sum::<f64>()
            })
            .collect();

        Ok(y)
    }

    fn kind(&self) -> &'static str {
        "tree_ensemble"
    }
}
