use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::series::Series;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no column named '{0}'")]
    MissingColumn(String),

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("column '{name}' has {got} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("cannot concatenate frames with different schemas: {0:?} vs {1:?}")]
    SchemaMismatch(Vec<String>, Vec<String>),
}

/// In-memory table of uniquely named, equal-length columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<Series>,
}

impl DataFrame {
    pub fn new(columns: Vec<Series>) -> Result<Self, DataError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(DataError::LengthMismatch {
                        name: column.name().to_string(),
                        expected,
                        got: column.len(),
                    });
                }
            }
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name() == column.name()) {
                return Err(DataError::DuplicateColumn(
                    column.name().to_string(),
                ));
            }
        }
        Ok(Self { columns })
    }

    /// Frame with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Series::len)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Series::name).collect()
    }

    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&Series, DataError> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// New frame without the named column. The column must exist.
    pub fn drop_column(&self, name: &str) -> Result<DataFrame, DataError> {
        self.column(name)?;
        let columns = self
            .columns
            .iter()
            .filter(|c| c.name() != name)
            .cloned()
            .collect();
        Ok(DataFrame { columns })
    }

    /// New frame with exactly the named columns, in the given order.
    /// Fails on the first absent name.
    pub fn select<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<DataFrame, DataError> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            columns.push(self.column(name.as_ref())?.clone());
        }
        Ok(DataFrame { columns })
    }

    /// Positional row-wise concatenation, `self`'s rows first. Both frames
    /// must have the same column names in the same order; whether the rows
    /// are comparable across frames is the caller's obligation.
    pub fn concat_rows(&self, other: &DataFrame) -> Result<DataFrame, DataError> {
        if self.column_names() != other.column_names() {
            return Err(DataError::SchemaMismatch(
                self.column_names().iter().map(|s| s.to_string()).collect(),
                other.column_names().iter().map(|s| s.to_string()).collect(),
            ));
        }
        let columns = self
            .columns
            .iter()
            .zip(&other.columns)
            .map(|(a, b)| a.concat(b))
            .collect();
        Ok(DataFrame { columns })
    }

    /// Replaces the same-named column, or appends a new one. The series
    /// length must match the frame's row count.
    pub fn with_column(&self, series: Series) -> Result<DataFrame, DataError> {
        if !self.columns.is_empty() && series.len() != self.num_rows() {
            return Err(DataError::LengthMismatch {
                name: series.name().to_string(),
                expected: self.num_rows(),
                got: series.len(),
            });
        }
        let mut columns = self.columns.clone();
        match columns.iter_mut().find(|c| c.name() == series.name()) {
            Some(slot) => *slot = series,
            None => columns.push(series),
        }
        Ok(DataFrame { columns })
    }
}
