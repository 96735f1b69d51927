//! Categorical decision trees induced with ID3 (information gain splits).
//!
//! ```
//! use categorical_id3::{Attribute, Dataset, DecisionTreeClassifier, Row, Schema};
//!
//! let schema = Schema::new(vec![
//!     Attribute::new("Color", ["red", "blue"]),
//!     Attribute::new("Class", ["yes", "no"]),
//! ])
//! .with_class_name("Class")?;
//! let rows = vec![Row::new(vec![0, 0]), Row::new(vec![1, 1])];
//! let data = Dataset::new(schema, rows)?;
//!
//! let mut clf = DecisionTreeClassifier::new(None);
//! clf.train(&data.view())?;
//! assert_eq!(clf.predict_label(&[1, 0])?, "no");
//! # Ok::<(), categorical_id3::Id3Error>(())
//! ```

pub mod common_types;
pub mod dataset;
pub mod encoding;
pub mod error;
pub mod trees;

#[cfg(feature = "python")]
mod python;

pub use common_types::{Attribute, Row, Schema};
pub use dataset::{Dataset, DatasetView};
pub use encoding::{encode_instance, NominalEncoder};
pub use error::Id3Error;
pub use trees::{DecisionTreeClassifier, Node, Tree, TreeBuilder, TreeConfig};
