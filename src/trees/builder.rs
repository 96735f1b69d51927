//! ID3 tree induction: recursive partitioning on the attribute with the
//! highest information gain.

use crate::dataset::DatasetView;
use crate::error::Id3Error;
use crate::trees::entropy::information_gain;
use crate::trees::node::{Node, Tree};
use ordered_float::OrderedFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gains at or below this are rounding noise, not information. Two gains
/// closer than this are a tie.
const GAIN_TOLERANCE: f64 = 1e-12;

/// Tree induction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeConfig {
    /// Class predicted by leaves grown from empty partitions, i.e. for
    /// attribute values no training row reached along that path.
    pub empty_leaf_class: usize,
}

impl TreeConfig {
    pub const DEFAULT_EMPTY_LEAF_CLASS: usize = 0;
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            empty_leaf_class: Self::DEFAULT_EMPTY_LEAF_CLASS,
        }
    }
}

/// The attribute chosen for a split and the gain it achieves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SplitCandidate {
    column: usize,
    gain: OrderedFloat<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeConfig) -> Self {
        TreeBuilder { config }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Induces a tree from `view`.
    ///
    /// The view's schema must designate a class attribute with a non-empty
    /// domain that contains `empty_leaf_class`.
    pub fn build(&self, view: &DatasetView<'_>) -> Result<Tree, Id3Error> {
        let schema = view.schema();
        let class_column = schema
            .class_column()
            .ok_or_else(|| Id3Error::InvalidSchema("no class attribute designated".to_string()))?;
        let class_attribute = schema.class_attribute().ok_or_else(|| {
            Id3Error::InvalidSchema(format!(
                "class column {} is out of range for {} attributes",
                class_column,
                schema.len()
            ))
        })?;
        if class_attribute.is_empty() {
            return Err(Id3Error::InvalidSchema(format!(
                "class attribute '{}' has an empty domain",
                class_attribute.name()
            )));
        }
        if !class_attribute.contains_index(self.config.empty_leaf_class) {
            return Err(Id3Error::InvalidConfig(format!(
                "empty_leaf_class {} is outside the domain of '{}' ({} values)",
                self.config.empty_leaf_class,
                class_attribute.name(),
                class_attribute.len()
            )));
        }

        let mut used = vec![false; schema.len()];
        used[class_column] = true; // The class is never a split candidate
        let root = self.build_node(view, class_column, &mut used);
        Ok(Tree::new(root, class_attribute.clone()))
    }

    /// `used` marks the class column and every attribute already split on
    /// along the current path.
    fn build_node(&self, view: &DatasetView<'_>, class_column: usize, used: &mut [bool]) -> Node {
        let mut classes = view.rows().map(|row| row.values()[class_column]);
        let first_class = match classes.next() {
            Some(class) => class,
            None => {
                return Node::Leaf {
                    class: self.config.empty_leaf_class,
                };
            }
        };
        if classes.all(|class| class == first_class) {
            return Node::Leaf { class: first_class };
        }

        // Mixed classes: look for the most informative attribute left on this path
        let Some(best) = choose_best_attribute(view, used) else {
            let class = majority_class(view).unwrap_or(first_class);
            tracing::trace!(rows = view.len(), class, "no informative attribute, majority leaf");
            return Node::Leaf { class };
        };

        let schema = view.schema();
        let attribute = schema.attributes()[best.column].clone();
        tracing::debug!(
            attribute = attribute.name(),
            gain = best.gain.0,
            rows = view.len(),
            "splitting"
        );

        used[best.column] = true;
        // One child per domain value, observed or not (empty partitions get the default leaf)
        let children = (0..attribute.len())
            .map(|value| self.build_node(&view.filter(best.column, value), class_column, used))
            .collect();
        used[best.column] = false; // Siblings of this node may still split on it

        Node::Internal {
            column: best.column,
            attribute,
            children,
        }
    }
}

/// Attribute with the highest positive information gain, first in schema
/// order on ties. `None` when no attribute carries information.
fn choose_best_attribute(view: &DatasetView<'_>, used: &[bool]) -> Option<SplitCandidate> {
    let mut best: Option<SplitCandidate> = None;
    for column in view.schema().feature_columns().filter(|&c| !used[c]) {
        let gain = information_gain::<f64>(view, column).unwrap_or(0.0);
        tracing::trace!(column, gain, "candidate");
        if gain <= GAIN_TOLERANCE {
            continue;
        }
        let gain = OrderedFloat(gain);
        // Equal information summed in a different order can differ in the last
        // bits, so a later column has to beat the current best by the tolerance.
        if best.map_or(true, |b| gain.0 > b.gain.0 + GAIN_TOLERANCE) {
            best = Some(SplitCandidate { column, gain });
        }
    }
    best
}

/// Most frequent class in `view`; ties go to the class seen first.
pub fn majority_class(view: &DatasetView<'_>) -> Option<usize> {
    let class_len = view.class_attribute()?.len();
    let mut counts = vec![0usize; class_len];
    let mut first_seen = Vec::new();
    for class in view.class_values()? {
        if counts[class] == 0 {
            first_seen.push(class); // Remember scan order for the tie-break
        }
        counts[class] += 1;
    }

    let mut majority: Option<usize> = None;
    for class in first_seen {
        if majority.map_or(true, |m| counts[class] > counts[m]) {
            majority = Some(class);
        }
    }
    majority
}
