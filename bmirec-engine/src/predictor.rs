use bmirec_model::recommendation::FeatureVector;
use serde::Deserialize;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    #[error("model has no nodes")]
    EmptyModel,
    #[error("node reference {0} is out of range")]
    NodeOutOfRange(usize),
    #[error("feature index {0} is out of range")]
    FeatureOutOfRange(usize),
    #[error("model tree does not terminate")]
    CyclicModel,
}

/// Opaque pre-trained classifier. Single-shot and stateless: one call per
/// evaluation, no retry, no batching.
#[mockall::automock]
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<u32, PredictionError>;
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: u32,
    },
}

/// Decision tree classifier restored from a JSON artifact. Node 0 is the
/// root; a feature value below the split threshold goes left, otherwise
/// right, until a leaf yields the numeric class label.
#[derive(Debug, Deserialize)]
pub struct DecisionTreePredictor {
    feature_names: Vec<String>,
    nodes: Vec<TreeNode>,
}

impl DecisionTreePredictor {
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

impl Predictor for DecisionTreePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<u32, PredictionError> {
        if self.nodes.is_empty() {
            return Err(PredictionError::EmptyModel);
        }

        let values = features.to_array();
        let mut index = 0;
        // a well-formed tree reaches a leaf within nodes.len() steps
        for _ in 0..self.nodes.len() {
            match self
                .nodes
                .get(index)
                .ok_or(PredictionError::NodeOutOfRange(index))?
            {
                TreeNode::Leaf { label } => return Ok(*label),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = values
                        .get(*feature)
                        .ok_or(PredictionError::FeatureOutOfRange(*feature))?;
                    index = if value < threshold { *left } else { *right };
                }
            }
        }

        Err(PredictionError::CyclicModel)
    }
}
