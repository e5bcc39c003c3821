//! Contact form validity

use super::field::{FieldName, FormFields};

/// True iff every field is non-empty after trimming surrounding whitespace.
///
/// Email format is not checked.
pub fn is_valid(fields: &FormFields) -> bool {
    FieldName::ALL
        .iter()
        .all(|field| !fields.get(*field).trim().is_empty())
}

/// Fields that currently keep the form invalid, in display order
pub fn missing_fields(fields: &FormFields) -> Vec<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| fields.get(*field).trim().is_empty())
        .collect()
}
