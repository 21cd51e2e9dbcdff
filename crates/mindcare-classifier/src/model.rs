//! Exported model artifacts.
//!
//! Models are trained offline and exported to JSON. Three estimator
//! families are understood, all laid out the way scikit-learn stores
//! them internally:
//!
//! - `linear`: one coefficient row and intercept per class; the class with
//!   the largest decision value wins. A single row is a binary model where a
//!   positive decision value selects class 1.
//! - `decision_tree`: the flattened `tree_` arrays (`children_left`,
//!   `children_right`, `feature`, `threshold`, `value`). A leaf has
//!   `children_left == -1`; samples with `x[feature] <= threshold` go left.
//! - `random_forest`: a list of decision trees whose normalized leaf
//!   distributions are averaged.
//!
//! Ties always resolve to the lowest class index.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mindcare_instruments::FeatureRow;

use crate::error::ClassifierError;

const LEAF: i64 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub n_features: usize,
    /// Training column names. Checked against the row when present.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    /// Encoded class id for each output index. Identity when absent.
    #[serde(default)]
    pub classes: Option<Vec<usize>>,
    #[serde(flatten)]
    pub estimator: Estimator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Linear(LinearModel),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights; only leaves are read.
    pub value: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl ModelArtifact {
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let bytes = std::fs::read(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_slice(&bytes)?;
        artifact.validate()?;
        tracing::info!(
            path = %path.display(),
            n_features = artifact.n_features,
            n_outputs = artifact.output_count(),
            "model artifact loaded"
        );
        Ok(artifact)
    }

    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Number of distinct outputs the estimator can produce.
    pub fn output_count(&self) -> usize {
        match &self.estimator {
            Estimator::Linear(m) if m.coefficients.len() == 1 => 2,
            Estimator::Linear(m) => m.coefficients.len(),
            Estimator::DecisionTree(t) => t.value.first().map_or(0, Vec::len),
            Estimator::RandomForest(f) => f
                .trees
                .first()
                .and_then(|t| t.value.first())
                .map_or(0, Vec::len),
        }
    }

    /// Largest encoded class id this model can emit.
    pub fn max_class_id(&self) -> Option<usize> {
        match &self.classes {
            Some(classes) => classes.iter().copied().max(),
            None => self.output_count().checked_sub(1),
        }
    }

    /// Structural checks done once at load time so prediction can index freely.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.n_features == 0 {
            return Err(malformed("n_features must be positive"));
        }
        if let Some(names) = &self.feature_names
            && names.len() != self.n_features
        {
            return Err(malformed(format!(
                "{} feature names for {} features",
                names.len(),
                self.n_features
            )));
        }

        let outputs = self.output_count();
        if outputs == 0 {
            return Err(malformed("model has no classes"));
        }
        if let Some(classes) = &self.classes
            && classes.len() != outputs
        {
            return Err(malformed(format!(
                "{} class ids for {} outputs",
                classes.len(),
                outputs
            )));
        }

        match &self.estimator {
            Estimator::Linear(m) => m.validate(self.n_features),
            Estimator::DecisionTree(t) => t.validate(self.n_features, outputs),
            Estimator::RandomForest(f) => {
                if f.trees.is_empty() {
                    return Err(malformed("random forest has no trees"));
                }
                f.trees
                    .iter()
                    .try_for_each(|t| t.validate(self.n_features, outputs))
            }
        }
    }

    /// Predict the encoded class id for one feature row.
    pub fn predict(&self, row: &FeatureRow) -> Result<usize, ClassifierError> {
        self.check_shape(row)?;
        let x = row.to_f64();

        let index = match &self.estimator {
            Estimator::Linear(m) => m.predict(&x),
            Estimator::DecisionTree(t) => argmax(&normalized(t.leaf_value(&x))),
            Estimator::RandomForest(f) => f.predict(&x),
        };

        Ok(match &self.classes {
            Some(classes) => classes[index],
            None => index,
        })
    }

    fn check_shape(&self, row: &FeatureRow) -> Result<(), ClassifierError> {
        if row.len() != self.n_features {
            return Err(ClassifierError::FeatureCountMismatch {
                expected: self.n_features,
                actual: row.len(),
            });
        }
        if let Some(expected) = &self.feature_names {
            let actual = row.column_names();
            if let Some((index, (e, a))) = expected
                .iter()
                .zip(&actual)
                .enumerate()
                .find(|(_, (e, a))| e != a)
            {
                return Err(ClassifierError::FeatureNameMismatch {
                    index,
                    expected: e.clone(),
                    actual: a.clone(),
                });
            }
        }
        Ok(())
    }
}

impl LinearModel {
    fn validate(&self, n_features: usize) -> Result<(), ClassifierError> {
        if self.coefficients.len() != self.intercepts.len() {
            return Err(malformed(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        if let Some(row) = self.coefficients.iter().find(|r| r.len() != n_features) {
            return Err(malformed(format!(
                "coefficient row has {} weights, expected {n_features}",
                row.len()
            )));
        }
        Ok(())
    }

    fn decision(&self, x: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(w, b)| w.iter().zip(x).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect()
    }

    fn predict(&self, x: &[f64]) -> usize {
        let scores = self.decision(x);
        if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores)
        }
    }
}

impl DecisionTree {
    fn validate(&self, n_features: usize, outputs: usize) -> Result<(), ClassifierError> {
        let n = self.children_left.len();
        if n == 0 {
            return Err(malformed("decision tree has no nodes"));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(malformed("decision tree arrays differ in length"));
        }

        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF {
                if self.value[node].len() != outputs {
                    return Err(malformed(format!(
                        "leaf {node} has {} class weights, expected {outputs}",
                        self.value[node].len()
                    )));
                }
                continue;
            }
            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(malformed(format!("node {node} has invalid child {child}")));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(malformed(format!(
                    "node {node} splits on feature {feature}, model has {n_features}"
                )));
            }
        }
        Ok(())
    }

    /// Class weights of the leaf `x` lands in.
    ///
    /// Children always have larger indices than their parent (checked in
    /// `validate`), so the walk terminates.
    fn leaf_value(&self, x: &[f64]) -> &[f64] {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        &self.value[node]
    }
}

impl RandomForest {
    fn predict(&self, x: &[f64]) -> usize {
        let mut totals: Vec<f64> = Vec::new();
        for tree in &self.trees {
            let dist = normalized(tree.leaf_value(x));
            if totals.is_empty() {
                totals = vec![0.0; dist.len()];
            }
            for (total, p) in totals.iter_mut().zip(dist) {
                *total += p;
            }
        }
        argmax(&totals)
    }
}

fn normalized(weights: &[f64]) -> Vec<f64> {
    let sum: f64 = weights.iter().sum();
    if sum > 0.0 {
        weights.iter().map(|w| w / sum).collect()
    } else {
        weights.to_vec()
    }
}

/// Index of the first maximum.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

fn malformed(msg: impl Into<String>) -> ClassifierError {
    ClassifierError::MalformedModel(msg.into())
}
