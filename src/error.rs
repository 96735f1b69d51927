//! Error type shared by dataset construction, training and prediction.

use thiserror::Error;

/// Errors surfaced by the categorical ID3 classifier.
///
/// Every condition is detected where it happens and returned to the caller;
/// the crate never substitutes a fallback prediction on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Id3Error {
    /// The schema cannot be trained on (no class attribute, empty class domain, ...).
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// `predict` was called before a successful `train`.
    #[error("Classifier has not been trained. Call train() first.")]
    NotTrained,

    /// An instance carries a value index outside the trained domain of a split attribute.
    #[error(
        "Unknown category {value} for attribute '{attribute}' (trained domain has {domain} values)"
    )]
    UnknownCategory {
        attribute: String,
        value: usize,
        domain: usize,
    },

    /// The configuration does not fit the schema it is trained on.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A row or record does not have one value per schema column.
    #[error("Row {row} has {found} values, expected {expected}")]
    RowArity {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A training row holds a value index outside its attribute's domain.
    #[error("Row {row}: value {value} is outside the domain of '{attribute}' ({domain} values)")]
    ValueOutOfDomain {
        row: usize,
        attribute: String,
        value: usize,
        domain: usize,
    },
}
