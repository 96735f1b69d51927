//! Python bindings, built with the `python` feature.

use crate::common_types::Schema;
use crate::encoding::{encode_instance, NominalEncoder};
use crate::error::Id3Error;
use crate::trees::{DecisionTreeClassifier, TreeConfig};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::sync::Arc;

impl From<Id3Error> for PyErr {
    fn from(err: Id3Error) -> PyErr {
        match &err {
            Id3Error::NotTrained => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[pyclass(name = "Id3Classifier")]
struct PyId3Classifier {
    classifier: DecisionTreeClassifier,
    schema: Option<Arc<Schema>>, // Domains learnt by the last fit, used to encode test records
}

#[pymethods]
impl PyId3Classifier {
    #[new]
    #[pyo3(signature = (empty_leaf_class = TreeConfig::DEFAULT_EMPTY_LEAF_CLASS))]
    fn new(empty_leaf_class: usize) -> Self {
        PyId3Classifier {
            classifier: DecisionTreeClassifier::new(Some(TreeConfig { empty_leaf_class })),
            schema: None,
        }
    }

    /// Trains on string records. Every distinct value of a column becomes a category.
    fn fit(
        &mut self,
        header: Vec<String>,
        records: Vec<Vec<String>>,
        class_column: String,
    ) -> PyResult<()> {
        let encoder = NominalEncoder::new(header.as_slice(), &class_column)?;
        let data = encoder.fit_transform(&records)?;
        self.classifier.train(&data.view())?;
        self.schema = Some(data.schema().clone());
        Ok(())
    }

    /// Predicts the class label of one record laid out like the training header.
    fn predict_single(&self, record: Vec<String>) -> PyResult<String> {
        let schema = self.schema.as_ref().ok_or(Id3Error::NotTrained)?;
        let instance = encode_instance(schema, record.as_slice())?;
        Ok(self.classifier.predict_label(&instance)?.to_string())
    }

    fn predict(&self, records: Vec<Vec<String>>) -> PyResult<Vec<String>> {
        records.into_iter().map(|record| self.predict_single(record)).collect()
    }

    #[getter]
    fn depth(&self) -> PyResult<usize> {
        let tree = self.classifier.tree().ok_or(Id3Error::NotTrained)?;
        Ok(tree.depth())
    }

    #[getter]
    fn node_count(&self) -> PyResult<usize> {
        let tree = self.classifier.tree().ok_or(Id3Error::NotTrained)?;
        Ok(tree.node_count())
    }

    fn __repr__(&self) -> String {
        match self.classifier.tree() {
            Some(tree) => format!("Id3Classifier(\n{})", tree),
            None => "Id3Classifier(untrained)".to_string(),
        }
    }
}

/// Python module exposing the ID3 classifier. The name matches `lib.name` in `Cargo.toml`.
#[pymodule]
fn categorical_id3(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyId3Classifier>()?;
    Ok(())
}
