use miette::Diagnostic;
use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// Errors raised while building or reading a [`Row`](crate::Row).
///
/// Every variant is local and final: the operation that produced it had no
/// side effects and retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RowError {
    /// The number of values does not match the number of fields.
    #[error("schema has {expected} field(s) but {actual} value(s) were supplied")]
    #[diagnostic(
        code(db_row::schema_mismatch),
        help("supply exactly one value per field, in schema order")
    )]
    SchemaMismatch { expected: usize, actual: usize },

    /// A positional lookup fell outside `[-len, len)`.
    #[error("index {index} out of range for row of length {len}")]
    #[diagnostic(
        code(db_row::index_out_of_range),
        help("negative indices count back from the end of the row")
    )]
    IndexOutOfRange { index: isize, len: usize },

    /// A name lookup did not match any field.
    #[error("unknown field: {0}")]
    #[diagnostic(
        code(db_row::unknown_field),
        help("field names are matched exactly and case-sensitively")
    )]
    UnknownField(String),
}

/// Fieldless discriminant of [`RowError`], with stable string names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum ErrorKind {
    SchemaMismatch,
    IndexOutOfRange,
    UnknownField,
}

impl RowError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RowError::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            RowError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            RowError::UnknownField(_) => ErrorKind::UnknownField,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = RowError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RowError::SchemaMismatch {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "schema has 2 field(s) but 1 value(s) were supplied"
        );

        let err = RowError::IndexOutOfRange { index: -3, len: 2 };
        assert_eq!(err.to_string(), "index -3 out of range for row of length 2");

        let err = RowError::UnknownField("email".to_string());
        assert_eq!(err.to_string(), "unknown field: email");
    }

    #[test]
    fn test_error_kind_names() {
        let err = RowError::UnknownField("x".to_string());
        assert_eq!(err.kind(), ErrorKind::UnknownField);
        assert_eq!(err.kind().to_string(), "UnknownField");

        let name: &'static str = ErrorKind::IndexOutOfRange.into();
        assert_eq!(name, "IndexOutOfRange");
        assert_eq!(
            ErrorKind::from_str("SchemaMismatch").unwrap(),
            ErrorKind::SchemaMismatch
        );
    }

    #[test]
    fn test_error_diagnostic_code() {
        let err = RowError::SchemaMismatch {
            expected: 3,
            actual: 0,
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("db_row::schema_mismatch"));
        assert!(err.help().is_some());
    }
}
