//! Crop classifier adapter
//!
//! Loads a pre-trained random-forest snapshot (a versioned JSON artifact of
//! flat node-array decision trees) once at startup and maps a 7-feature
//! input to a crop label by majority vote. The loaded model is the only
//! process-wide state and is read-only after load.
//!
//! There is no training path here; the artifact is produced offline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use shared::{PredictionInput, FEATURE_COUNT};

/// Label reported when no model artifact is loaded.
pub const MODEL_UNAVAILABLE: &str = "Model not available";

/// A serialized random-forest snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropModel {
    pub version: u32,
    /// Feature column names in training order
    pub feature_names: Vec<String>,
    /// Class labels indexed by the leaves
    pub classes: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

/// One decision tree as a flat node array; node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

impl CropModel {
    /// Classify a feature vector by majority vote across the trees.
    ///
    /// Returns `None` only for a malformed artifact (dangling node index,
    /// feature index out of range, or a cyclic tree).
    pub fn predict(&self, input: &PredictionInput) -> Option<String> {
        let features = input.as_features();
        let mut votes = vec![0usize; self.classes.len()];

        for tree in &self.trees {
            let class = tree.classify(&features)?;
            *votes.get_mut(class)? += 1;
        }

        // Highest vote wins; ties break toward the lowest class index
        let winner = votes
            .iter()
            .enumerate()
            .max_by(|(ia, va), (ib, vb)| va.cmp(vb).then(ib.cmp(ia)))?
            .0;
        self.classes.get(winner).cloned()
    }
}

impl DecisionTree {
    fn classify(&self, features: &[f64; FEATURE_COUNT]) -> Option<usize> {
        let mut index = 0;
        // A well-formed tree reaches a leaf in fewer steps than it has
        // nodes; running out of steps means a cycle.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index)? {
                TreeNode::Leaf { class } => return Some(*class),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature)?;
                    index = if *value <= *threshold { *left } else { *right };
                }
            }
        }
        None
    }
}

/// Holds the lazily absent classifier; constructed once and shared.
pub struct PredictionService {
    model: Option<CropModel>,
}

impl PredictionService {
    /// Load the classifier snapshot, running without one if that fails.
    pub fn load(path: &Path) -> Self {
        let model = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<CropModel>(&raw) {
                Ok(model) if model.feature_names.len() == FEATURE_COUNT => {
                    tracing::info!(
                        path = %path.display(),
                        version = model.version,
                        trees = model.trees.len(),
                        classes = model.classes.len(),
                        "loaded crop classifier"
                    );
                    Some(model)
                }
                Ok(model) => {
                    tracing::error!(
                        path = %path.display(),
                        features = model.feature_names.len(),
                        expected = FEATURE_COUNT,
                        "classifier has wrong feature count, predictions disabled"
                    );
                    None
                }
                Err(err) => {
                    tracing::error!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse classifier, predictions disabled"
                    );
                    None
                }
            },
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "classifier artifact not found, predictions disabled"
                );
                None
            }
        };

        Self { model }
    }

    /// Build a service around an already-deserialized model (used by tests).
    pub fn from_model(model: CropModel) -> Self {
        Self { model: Some(model) }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Map features to a crop label, or the sentinel when no model exists.
    pub fn predict(&self, input: &PredictionInput) -> String {
        self.model
            .as_ref()
            .and_then(|model| model.predict(input))
            .unwrap_or_else(|| MODEL_UNAVAILABLE.to_string())
    }
}
