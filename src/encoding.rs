//! Conversion of string records into categorical datasets.
//!
//! Every distinct (trimmed) string in a column becomes one category, in the
//! order values are first seen. Numeric-looking columns are treated the same
//! way: each distinct literal is a category.

use crate::common_types::{Attribute, Row, Schema};
use crate::dataset::Dataset;
use crate::error::Id3Error;
use std::collections::HashMap;

/// Builds a [`Dataset`] from string records with a named class column.
#[derive(Debug, Clone)]
pub struct NominalEncoder {
    header: Vec<String>,
    class_column: usize,
}

impl NominalEncoder {
    pub fn new<S: AsRef<str>>(header: &[S], class_column_name: &str) -> Result<Self, Id3Error> {
        let header: Vec<String> = header.iter().map(|h| h.as_ref().trim().to_string()).collect();
        let class_column = header
            .iter()
            .position(|h| h == class_column_name.trim())
            .ok_or_else(|| {
                Id3Error::InvalidSchema(format!(
                    "class column '{}' not found in header",
                    class_column_name
                ))
            })?;
        Ok(NominalEncoder { header, class_column })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn class_column(&self) -> usize {
        self.class_column
    }

    /// Learns one domain per column from `records` and encodes them.
    pub fn fit_transform<I, R, S>(&self, records: I) -> Result<Dataset, Id3Error>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let width = self.header.len();
        let mut domains: Vec<Vec<String>> = vec![Vec::new(); width];
        let mut lookup: Vec<HashMap<String, usize>> = vec![HashMap::new(); width];
        let mut rows = Vec::new();

        for (row_idx, record) in records.into_iter().enumerate() {
            let fields: Vec<S> = record.into_iter().collect();
            if fields.len() != width {
                return Err(Id3Error::RowArity {
                    row: row_idx,
                    expected: width,
                    found: fields.len(),
                });
            }
            let mut values = Vec::with_capacity(width);
            for (column, field) in fields.iter().enumerate() {
                let field = field.as_ref().trim();
                let index = match lookup[column].get(field) {
                    Some(&index) => index,
                    None => {
                        let index = domains[column].len();
                        domains[column].push(field.to_string());
                        lookup[column].insert(field.to_string(), index);
                        index
                    }
                };
                values.push(index);
            }
            rows.push(Row::new(values));
        }

        let attributes = self
            .header
            .iter()
            .zip(domains)
            .map(|(name, values)| Attribute::new(name.clone(), values))
            .collect();
        let schema = Schema::new(attributes).with_class(self.class_column)?;
        tracing::debug!(
            rows = rows.len(),
            columns = width,
            classes = schema.class_attribute().map_or(0, |a| a.len()),
            "encoded records"
        );
        Dataset::new(schema, rows)
    }
}

/// Encodes a test record against the domains of `schema`.
///
/// Values never seen in training are encoded one past their column's domain,
/// so prediction fails with [`Id3Error::UnknownCategory`] only if the tree
/// actually consults that column. The class field is ignored and encoded as 0.
pub fn encode_instance<S: AsRef<str>>(
    schema: &Schema,
    record: &[S],
) -> Result<Vec<usize>, Id3Error> {
    if record.len() != schema.len() {
        return Err(Id3Error::RowArity {
            row: 0,
            expected: schema.len(),
            found: record.len(),
        });
    }
    let instance = schema
        .attributes()
        .iter()
        .zip(record)
        .enumerate()
        .map(|(column, (attribute, field))| {
            if Some(column) == schema.class_column() {
                return 0;
            }
            attribute.index_of(field.as_ref().trim()).unwrap_or(attribute.len())
        })
        .collect();
    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::DecisionTreeClassifier;

    const HEADER: [&str; 4] = ["patient_id", "Outlook", "Windy", "Play"];

    fn weather() -> Vec<[&'static str; 4]> {
        vec![
            ["1", "sunny", "false", "no"],
            ["2", "sunny", "true", "no"],
            ["3", "overcast", "false", "yes"],
            ["4", "rain", "false", "yes"],
            ["5", "rain", "true", "no"],
            ["6", "overcast", "true", "yes"],
        ]
    }

    #[test]
    fn test_domains_follow_first_seen_order() {
        let encoder = NominalEncoder::new(&HEADER, "Play").unwrap();
        let data = encoder.fit_transform(&weather()).unwrap();
        let schema = data.schema();
        assert_eq!(schema.class_column(), Some(3));
        assert_eq!(schema.attributes()[1].values(), ["sunny", "overcast", "rain"]);
        assert_eq!(schema.attributes()[3].values(), ["no", "yes"]);
        assert_eq!(data.rows()[3].values(), &[3, 2, 0, 1]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let encoder = NominalEncoder::new(&["A", " Class "], "Class").unwrap();
        let data = encoder.fit_transform(&[["x ", "c"], [" x", "d"]]).unwrap();
        assert_eq!(data.schema().attributes()[0].values(), ["x"]);
    }

    #[test]
    fn test_unknown_class_column() {
        assert!(matches!(
            NominalEncoder::new(&HEADER, "DiagPeriodL90D"),
            Err(Id3Error::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_ragged_record() {
        let encoder = NominalEncoder::new(&HEADER, "Play").unwrap();
        let records: Vec<Vec<&str>> = vec![vec!["1", "sunny", "false", "no"], vec!["2", "sunny"]];
        assert_eq!(
            encoder.fit_transform(&records).unwrap_err(),
            Id3Error::RowArity { row: 1, expected: 4, found: 2 }
        );
    }

    #[test]
    fn test_encode_instance_marks_unseen_values() {
        let encoder = NominalEncoder::new(&HEADER, "Play").unwrap();
        let data = encoder.fit_transform(&weather()).unwrap();
        let instance = encode_instance(data.schema(), &["99", "rain", "maybe", "?"]).unwrap();
        assert_eq!(instance, vec![6, 2, 2, 0]);
        assert!(encode_instance(data.schema(), &["1", "rain"]).is_err());
    }

    #[test]
    fn test_end_to_end_batch() {
        // Drop the id column the way a batch driver would before training.
        let header = &HEADER[1..];
        let weather = weather();
        let records: Vec<Vec<&str>> = weather.iter().map(|r| r[1..].to_vec()).collect();
        let encoder = NominalEncoder::new(header, "Play").unwrap();
        let data = encoder.fit_transform(&records).unwrap();

        let mut clf = DecisionTreeClassifier::new(None);
        clf.train(&data.view()).unwrap();
        for (record, row) in records.iter().zip(data.rows()) {
            let instance = encode_instance(data.schema(), record.as_slice()).unwrap();
            let expected = data.schema().attributes()[2].value(row.values()[2]).unwrap();
            assert_eq!(clf.predict_label(&instance), Ok(expected));
        }

        let unseen_outlook = encode_instance(data.schema(), &["fog", "false", ""]).unwrap();
        assert!(matches!(
            clf.predict(&unseen_outlook),
            Err(Id3Error::UnknownCategory { .. })
        ));
    }
}
