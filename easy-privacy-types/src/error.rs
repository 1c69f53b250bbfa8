use thiserror::Error;

use crate::entry::EntryField;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown industry {0}")]
pub struct UnknownIndustry(pub String);

/// Validation failure on the landing form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please enter company name and select an industry")]
    MissingFields,
}

/// Validation failures on the entry editor, in the order they are checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Company name cannot be empty.")]
    MissingCompanyName,
    #[error("Please select an industry.")]
    MissingIndustry,
    #[error("Please provide an email address.")]
    MissingEmail,
    #[error("Please provide a valid email address.")]
    InvalidEmail,
    /// `row` is the 1-based position shown to the user.
    #[error("Row {row}: {} cannot be empty.", .field.label())]
    EmptyCell { row: usize, field: EntryField },
    #[error("{0}")]
    Wire(#[from] WireError),
}

/// Errors crossing the query-string boundary between views.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("JSON {0}")]
    Json(String),
    #[error("Query string {0}")]
    Query(String),
    #[error("Forwarded data was not valid UTF-8")]
    Utf8,
}

impl From<serde_json::Error> for WireError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl From<serde_qs::Error> for WireError {
    fn from(value: serde_qs::Error) -> Self {
        Self::Query(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_messages_use_field_label() {
        let data = EditorError::EmptyCell {
            row: 1,
            field: EntryField::Data,
        };
        let purpose = EditorError::EmptyCell {
            row: 2,
            field: EntryField::Purpose,
        };
        assert_eq!(data.to_string(), "Row 1: Data cannot be empty.");
        assert_eq!(purpose.to_string(), "Row 2: Purpose cannot be empty.");
    }
}
