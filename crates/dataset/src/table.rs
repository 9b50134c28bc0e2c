//! Feature Table

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Values held by a single feature column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValues {
    /// Real-valued column
    Numeric(Vec<f64>),
    /// Free-form text column (categorical data the loader could not convert)
    Text(Vec<String>),
}

impl ColumnValues {
    /// Number of rows in the column
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    /// Check if the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric view, `None` for non-numeric columns
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            ColumnValues::Numeric(v) => Some(v),
            ColumnValues::Text(_) => None,
        }
    }

    /// Short type name used in diagnostics
    pub fn dtype(&self) -> &'static str {
        match self {
            ColumnValues::Numeric(_) => "numeric",
            ColumnValues::Text(_) => "text",
        }
    }
}

/// A named feature column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureColumn {
    /// Feature identifier
    pub name: String,
    /// Column values, one per row
    pub values: ColumnValues,
}

impl FeatureColumn {
    /// Create a numeric column
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Numeric(values),
        }
    }

    /// Create a text column
    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Text(values),
        }
    }
}

/// Ordered set of named columns sharing a row count (N rows x D columns)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FeatureTable {
    columns: Vec<FeatureColumn>,
    n_rows: usize,
}

impl FeatureTable {
    /// Build a table from columns. All columns must have the same length and unique names.
    pub fn new(columns: Vec<FeatureColumn>) -> Result<Self, DatasetError> {
        let n_rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        let mut seen = HashSet::with_capacity(columns.len());

        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
            if column.values.len() != n_rows {
                return Err(DatasetError::RaggedColumns {
                    column: column.name.clone(),
                    expected: n_rows,
                    actual: column.values.len(),
                });
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Build an all-numeric table from row-major data
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: &[Vec<f64>]) -> Result<Self, DatasetError> {
        let width = names.len();
        let mut data: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); width];

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(DatasetError::RaggedRow {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (col, &value) in data.iter_mut().zip(row) {
                col.push(value);
            }
        }

        let columns = names
            .iter()
            .zip(data)
            .map(|(name, values)| FeatureColumn::numeric(name.as_ref(), values))
            .collect();
        Self::new(columns)
    }

    /// Number of rows (N)
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of feature columns (D)
    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no columns or no rows
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.n_rows == 0
    }

    /// All columns in order
    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    /// Column names in order
    pub fn feature_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table() {
        let table = FeatureTable::new(vec![
            FeatureColumn::numeric("a", vec![1.0, 2.0, 3.0]),
            FeatureColumn::numeric("b", vec![4.0, 5.0, 6.0]),
        ])
        .unwrap();

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_features(), 2);
        assert_eq!(table.feature_names(), vec!["a", "b"]);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_ragged_columns() {
        let err = FeatureTable::new(vec![
            FeatureColumn::numeric("a", vec![1.0, 2.0, 3.0]),
            FeatureColumn::numeric("b", vec![4.0]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            DatasetError::RaggedColumns {
                column: "b".to_string(),
                expected: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_duplicate_column() {
        let err = FeatureTable::new(vec![
            FeatureColumn::numeric("a", vec![1.0]),
            FeatureColumn::numeric("a", vec![2.0]),
        ])
        .unwrap_err();
        assert_eq!(err, DatasetError::DuplicateColumn("a".to_string()));
    }

    #[test]
    fn test_from_rows() {
        let table = FeatureTable::from_rows(
            &["x", "y"],
            &[vec![1.0, 10.0], vec![2.0, 20.0]],
        )
        .unwrap();

        let y = &table.columns()[1];
        assert_eq!(y.name, "y");
        assert_eq!(y.values.as_numeric(), Some(&[10.0, 20.0][..]));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = FeatureTable::from_rows(&["x", "y"], &[vec![1.0, 10.0], vec![2.0]]).unwrap_err();
        assert!(matches!(err, DatasetError::RaggedRow { row: 1, expected: 2, actual: 1 }));
    }

    #[test]
    fn test_text_column_has_no_numeric_view() {
        let column = FeatureColumn::text("color", vec!["red".into(), "blue".into()]);
        assert!(column.values.as_numeric().is_none());
        assert_eq!(column.values.dtype(), "text");
        assert_eq!(column.values.len(), 2);
    }

    #[test]
    fn test_serialize_table() {
        let table = FeatureTable::from_rows(&["x"], &[vec![1.5]]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["n_rows"], 1);
        assert_eq!(json["columns"][0]["name"], "x");
        assert_eq!(json["columns"][0]["values"]["Numeric"][0], 1.5);
    }
}
