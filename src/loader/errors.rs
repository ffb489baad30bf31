//! # Record Loading Errors

use thiserror::Error;

use crate::model::TimeError;

/// Result type for loading operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Record loading errors. Any of these aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid CSV in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing column '{column}' in {origin}")]
    MissingColumn { origin: String, column: String },

    #[error("{origin} row {row}: missing required {field}")]
    MissingValue {
        origin: String,
        row: usize,
        field: &'static str,
    },

    #[error("{origin} row {row}: invalid {field} '{value}'")]
    InvalidValue {
        origin: String,
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("{origin} row {row}: {source}")]
    InvalidTime {
        origin: String,
        row: usize,
        #[source]
        source: TimeError,
    },
}

impl LoadError {
    /// Where the failing records came from
    pub fn origin(&self) -> &str {
        match self {
            LoadError::Io { origin, .. }
            | LoadError::Csv { origin, .. }
            | LoadError::Json { origin, .. }
            | LoadError::MissingColumn { origin, .. }
            | LoadError::MissingValue { origin, .. }
            | LoadError::InvalidValue { origin, .. }
            | LoadError::InvalidTime { origin, .. } => origin,
        }
    }

    /// Data row (1-based) of the failing record, when known
    pub fn row(&self) -> Option<usize> {
        match self {
            LoadError::MissingValue { row, .. }
            | LoadError::InvalidValue { row, .. }
            | LoadError::InvalidTime { row, .. } => Some(*row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_context() {
        let err = LoadError::InvalidValue {
            origin: "neos.csv".into(),
            row: 7,
            field: "diameter",
            value: "big".into(),
        };
        assert_eq!(err.to_string(), "neos.csv row 7: invalid diameter 'big'");
        assert_eq!(err.origin(), "neos.csv");
        assert_eq!(err.row(), Some(7));

        let err = LoadError::MissingColumn {
            origin: "cad.json".into(),
            column: "des".into(),
        };
        assert_eq!(err.row(), None);
    }
}
