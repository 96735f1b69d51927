//! This module contains the schema-level data structures shared by datasets and trees.

use crate::error::Id3Error;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named categorical column with a fixed, ordered domain.
///
/// Values are addressed by their position in the domain (`0..len()`).
/// Attributes are shared behind an `Arc` by the schema, every view derived
/// from it and every tree node that splits on them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute {
    name: String,
    values: Vec<String>,
}

impl Attribute {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Attribute {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values in the domain.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Human readable value for a value index.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Position of `value` in the domain (first match).
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value) // Linear scan, domains are small
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.values.len()
    }
}

/// Ordered attribute list plus the optionally designated class column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema {
    attributes: Vec<Arc<Attribute>>,
    class_column: Option<usize>,
}

impl Schema {
    /// Creates a schema without a class attribute. Use [`Schema::with_class`]
    /// or [`Schema::with_class_name`] to designate one before training.
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Schema {
            attributes: attributes.into_iter().map(Arc::new).collect(),
            class_column: None,
        }
    }

    pub fn with_class(mut self, column: usize) -> Result<Self, Id3Error> {
        if column >= self.attributes.len() {
            return Err(Id3Error::InvalidSchema(format!(
                "class column {} is out of range for {} attributes",
                column,
                self.attributes.len()
            )));
        }
        self.class_column = Some(column);
        Ok(self)
    }

    pub fn with_class_name(self, name: &str) -> Result<Self, Id3Error> {
        let column = self
            .column_of(name)
            .ok_or_else(|| Id3Error::InvalidSchema(format!("no attribute named '{}'", name)))?;
        self.with_class(column)
    }

    pub fn attributes(&self) -> &[Arc<Attribute>] {
        &self.attributes
    }

    pub fn attribute(&self, column: usize) -> Option<&Arc<Attribute>> {
        self.attributes.get(column)
    }

    pub fn column_of(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    /// Number of columns, class column included.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn class_column(&self) -> Option<usize> {
        self.class_column
    }

    pub fn class_attribute(&self) -> Option<&Arc<Attribute>> {
        self.class_column.and_then(|c| self.attributes.get(c))
    }

    /// Columns that may be split on, in schema order.
    pub fn feature_columns(&self) -> impl Iterator<Item = usize> + '_ {
        // Skip the class column, keep everything else in order
        (0..self.attributes.len()).filter(move |&c| Some(c) != self.class_column)
    }
}

/// A single row of value indices, one per schema column.
///
/// The class column holds the class value index. Rows never change once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    values: Vec<usize>,
}

impl Row {
    pub fn new(values: Vec<usize>) -> Self {
        Row { values }
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn value(&self, column: usize) -> Option<usize> {
        self.values.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<usize>> for Row {
    fn from(values: Vec<usize>) -> Self {
        Row::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_schema() -> Schema {
        Schema::new(vec![
            Attribute::new("Outlook", ["sunny", "overcast", "rain"]),
            Attribute::new("Windy", ["false", "true"]),
            Attribute::new("Play", ["yes", "no"]),
        ])
    }

    #[test]
    fn test_attribute_lookup() {
        let attr = Attribute::new("Color", ["red", "blue"]);
        assert_eq!(attr.len(), 2);
        assert_eq!(attr.value(1), Some("blue"));
        assert_eq!(attr.value(2), None);
        assert_eq!(attr.index_of("red"), Some(0));
        assert_eq!(attr.index_of("green"), None);
        assert!(attr.contains_index(1));
        assert!(!attr.contains_index(2));
    }

    #[test]
    fn test_schema_without_class() {
        let schema = weather_schema();
        assert_eq!(schema.class_column(), None);
        assert!(schema.class_attribute().is_none());
        assert_eq!(schema.feature_columns().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_schema_with_class_by_name() {
        let schema = weather_schema().with_class_name("Play").unwrap();
        assert_eq!(schema.class_column(), Some(2));
        assert_eq!(schema.class_attribute().unwrap().name(), "Play");
        assert_eq!(schema.feature_columns().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_schema_rejects_bad_class() {
        assert!(matches!(
            weather_schema().with_class(3),
            Err(Id3Error::InvalidSchema(_))
        ));
        assert!(matches!(
            weather_schema().with_class_name("Temperature"),
            Err(Id3Error::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_schema_shares_attributes() {
        let schema = weather_schema();
        let copy = schema.clone();
        assert!(Arc::ptr_eq(&schema.attributes()[0], &copy.attributes()[0]));
    }
}
