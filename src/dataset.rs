//! Validated datasets and the borrowed views the tree builder partitions.

use crate::common_types::{Attribute, Row, Schema};
use crate::error::Id3Error;
use std::sync::Arc;

/// Rows plus the schema they conform to.
///
/// Construction checks that every row has one value per column and that
/// every value index lies inside its column's domain, so views handed to the
/// entropy engine never need to re-check.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Arc<Schema>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(schema: impl Into<Arc<Schema>>, rows: Vec<Row>) -> Result<Self, Id3Error> {
        let schema = schema.into();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(Id3Error::RowArity {
                    row: row_idx,
                    expected: schema.len(),
                    found: row.len(),
                });
            }
            for (attribute, &value) in schema.attributes().iter().zip(row.values()) {
                if !attribute.contains_index(value) {
                    return Err(Id3Error::ValueOutOfDomain {
                        row: row_idx,
                        attribute: attribute.name().to_string(),
                        value,
                        domain: attribute.len(),
                    });
                }
            }
        }
        Ok(Dataset { schema, rows })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A view over every row, in insertion order.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            schema: &self.schema,
            rows: self.rows.iter().collect(),
        }
    }
}

/// An ordered selection of rows from a [`Dataset`].
///
/// Views only hold references: partitioning a view never copies rows or
/// attribute metadata. An empty view is a legal value.
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    schema: &'a Schema,
    rows: Vec<&'a Row>,
}

impl<'a> DatasetView<'a> {
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a Row> + '_ {
        self.rows.iter().copied()
    }

    pub fn class_column(&self) -> Option<usize> {
        self.schema.class_column()
    }

    pub fn class_attribute(&self) -> Option<&'a Arc<Attribute>> {
        self.schema.class_attribute()
    }

    /// Class value index of every row, or `None` when no class is designated.
    pub fn class_values(&self) -> Option<impl Iterator<Item = usize> + '_> {
        let class_column = self.class_column()?;
        Some(self.rows.iter().map(move |row| row.values()[class_column]))
    }

    /// Sub-view of the rows whose `column` holds `value`, in the same order.
    pub fn filter(&self, column: usize, value: usize) -> DatasetView<'a> {
        DatasetView {
            schema: self.schema,
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|row| row.values()[column] == value)
                .collect(),
        }
    }
}
