//! The induced model: a rooted tree of leaf and internal nodes.

use crate::common_types::Attribute;
use crate::error::Id3Error;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an induced tree.
///
/// Internal nodes own one child per value of their split attribute, indexed
/// by value index, so every value of the trained domain has somewhere to go.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    Leaf {
        class: usize,
    },
    Internal {
        column: usize,
        attribute: Arc<Attribute>,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => {
                1 + children.iter().map(Node::node_count).sum::<usize>()
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => {
                children.iter().map(Node::leaf_count).sum()
            }
        }
    }
}

/// A trained decision tree. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree {
    root: Node,
    class_attribute: Arc<Attribute>,
}

impl Tree {
    pub fn new(root: Node, class_attribute: Arc<Attribute>) -> Self {
        Tree { root, class_attribute }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn class_attribute(&self) -> &Arc<Attribute> {
        &self.class_attribute
    }

    /// Walks from the root to a leaf following `instance`, indexed by schema column.
    ///
    /// Fails with [`Id3Error::UnknownCategory`] when the instance holds a value
    /// (or lacks a column) the tree never saw for a split attribute it consults.
    pub fn classify(&self, instance: &[usize]) -> Result<usize, Id3Error> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { class } => return Ok(*class),
                Node::Internal { column, attribute, children } => {
                    // A missing column is reported like an unseen category
                    let value = instance.get(*column).copied().unwrap_or(usize::MAX);
                    node = children.get(value).ok_or_else(|| Id3Error::UnknownCategory {
                        attribute: attribute.name().to_string(),
                        value,
                        domain: children.len(),
                    })?;
                }
            }
        }
    }

    /// Human readable label for a predicted class index.
    pub fn label(&self, class: usize) -> Option<&str> {
        self.class_attribute.value(class)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    fn fmt_node(
        &self,
        node: &Node,
        indent: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let Node::Internal { attribute, children, .. } = node else {
            return Ok(());
        };
        for (value, child) in children.iter().enumerate() {
            write!(f, "{}", "|   ".repeat(indent))?;
            write!(f, "{} = {}", attribute.name(), attribute.value(value).unwrap_or("?"))?;
            match child {
                Node::Leaf { class } => writeln!(f, ": {}", self.label(*class).unwrap_or("?"))?,
                Node::Internal { .. } => {
                    writeln!(f)?; // Subtree continues on the next lines
                    self.fmt_node(child, indent + 1, f)?;
                }
            }
        }
        Ok(())
    }
}

/// One line per branch, indented by depth:
///
/// ```text
/// Outlook = sunny
/// |   Humidity = high: no
/// |   Humidity = normal: yes
/// Outlook = overcast: yes
/// ```
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Node::Leaf { class } => writeln!(f, ": {}", self.label(*class).unwrap_or("?")),
            Node::Internal { .. } => self.fmt_node(&self.root, 0, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_attribute() -> Arc<Attribute> {
        Arc::new(Attribute::new("Class", ["yes", "no"]))
    }

    fn color_tree() -> Tree {
        let color = Arc::new(Attribute::new("Color", ["red", "blue"]));
        Tree::new(
            Node::Internal {
                column: 0,
                attribute: color,
                children: vec![Node::Leaf { class: 0 }, Node::Leaf { class: 1 }],
            },
            class_attribute(),
        )
    }

    #[test]
    fn test_classify_single_leaf() {
        let tree = Tree::new(Node::Leaf { class: 1 }, class_attribute());
        assert_eq!(tree.classify(&[]), Ok(1));
        assert_eq!(tree.classify(&[5, 5, 5]), Ok(1));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_classify_follows_split_value() {
        let tree = color_tree();
        assert_eq!(tree.classify(&[0, 1]), Ok(0));
        assert_eq!(tree.classify(&[1, 0]), Ok(1));
        assert_eq!(tree.label(1), Some("no"));
    }

    #[test]
    fn test_classify_rejects_unseen_category() {
        let tree = color_tree();
        assert_eq!(
            tree.classify(&[2, 0]),
            Err(Id3Error::UnknownCategory {
                attribute: "Color".to_string(),
                value: 2,
                domain: 2
            })
        );
    }

    #[test]
    fn test_classify_rejects_missing_column() {
        let tree = color_tree();
        assert!(matches!(tree.classify(&[]), Err(Id3Error::UnknownCategory { .. })));
    }

    #[test]
    fn test_shape_metrics() {
        let size = Arc::new(Attribute::new("Size", ["small", "medium", "large"]));
        let tree = Tree::new(
            Node::Internal {
                column: 0,
                attribute: Arc::new(Attribute::new("Color", ["red", "blue"])),
                children: vec![
                    Node::Leaf { class: 0 },
                    Node::Internal {
                        column: 1,
                        attribute: size,
                        children: vec![
                            Node::Leaf { class: 0 },
                            Node::Leaf { class: 1 },
                            Node::Leaf { class: 1 },
                        ],
                    },
                ],
            },
            class_attribute(),
        );
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.leaf_count(), 4);
        assert!(!tree.root().is_leaf());

        let rendered = tree.to_string();
        let expected = "Color = red: yes\n\
                        Color = blue\n\
                        |   Size = small: yes\n\
                        |   Size = medium: no\n\
                        |   Size = large: no\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_display_single_leaf() {
        let tree = Tree::new(Node::Leaf { class: 0 }, class_attribute());
        assert_eq!(tree.to_string(), ": yes\n");
    }
}
