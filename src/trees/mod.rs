//! Categorical ID3 decision trees: entropy engine, builder, model and classifier.

pub mod builder;
pub mod decision_tree;
pub mod entropy;
pub mod node;

pub use builder::{TreeBuilder, TreeConfig};
pub use decision_tree::DecisionTreeClassifier;
pub use node::{Node, Tree};
