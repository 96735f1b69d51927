//! Decision tree classifier over categorical attributes.

use crate::dataset::DatasetView;
use crate::error::Id3Error;
use crate::trees::builder::{TreeBuilder, TreeConfig};
use crate::trees::node::Tree;

/// ID3 classifier: trains a [`Tree`] from a labelled view and predicts class
/// value indices by walking it.
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeClassifier {
    tree: Option<Tree>,
    config: TreeConfig,
}

impl DecisionTreeClassifier {
    pub fn new(config: Option<TreeConfig>) -> Self {
        DecisionTreeClassifier {
            tree: None,
            config: config.unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Trains on `view`, replacing any previously trained tree.
    ///
    /// On failure the previous tree, if any, is kept.
    pub fn train(&mut self, view: &DatasetView<'_>) -> Result<&Tree, Id3Error> {
        if view.is_empty() {
            tracing::warn!("training on an empty view; every prediction will be the default class");
        }
        let tree = TreeBuilder::new(self.config.clone()).build(view)?;
        tracing::info!(
            rows = view.len(),
            depth = tree.depth(),
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            "decision tree trained"
        );
        Ok(&*self.tree.insert(tree)) // Replaces any previously trained tree
    }

    pub fn is_trained(&self) -> bool {
        self.tree.is_some()
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    fn trained_tree(&self) -> Result<&Tree, Id3Error> {
        self.tree.as_ref().ok_or(Id3Error::NotTrained)
    }

    /// Class value index for `instance` (value indices by schema column; the
    /// class column is ignored).
    pub fn predict(&self, instance: &[usize]) -> Result<usize, Id3Error> {
        self.trained_tree()?.classify(instance)
    }

    /// Prediction translated to the class attribute's value.
    pub fn predict_label(&self, instance: &[usize]) -> Result<&str, Id3Error> {
        let tree = self.trained_tree()?;
        let class = tree.classify(instance)?;
        tree.label(class).ok_or_else(|| {
            Id3Error::InvalidSchema(format!(
                "class index {} has no value in '{}'",
                class,
                tree.class_attribute().name()
            ))
        })
    }

    /// Predicts every row of `view` in order, stopping at the first failure.
    pub fn predict_view(&self, view: &DatasetView<'_>) -> Result<Vec<usize>, Id3Error> {
        let tree = self.trained_tree()?;
        view.rows().map(|row| tree.classify(row.values())).collect() // Row values include the class
    }
}
