//! Field-level checks shared by the group and student services.

use crate::{
    model::patch::Patch,
    server::{
        error::{student::StudentError, validation::ValidationError},
        model::student::{MAX_AGE, MIN_AGE},
    },
};

/// Rejects names that are empty or only whitespace
///
/// # Arguments
/// - `field` - Field name reported in the error
/// - `name` - The candidate name
///
/// # Returns
/// - `Ok(())` - The name has at least one visible character
/// - `Err(ValidationError::BlankField)` - The name is blank
pub fn validate_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }

    Ok(())
}

/// Checks that `age` lies within `MIN_AGE..=MAX_AGE`
pub fn validate_age(age: i32) -> Result<(), StudentError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(StudentError::AgeOutOfRange(age));
    }

    Ok(())
}

/// Unwraps a patch for a non-nullable column
///
/// # Returns
/// - `Ok(None)` - The field was omitted and keeps its stored value
/// - `Ok(Some(value))` - The field should be set to `value`
/// - `Err(ValidationError::NullField)` - The field was explicitly null
pub fn require_non_null<T>(
    field: &'static str,
    patch: Patch<T>,
) -> Result<Option<T>, ValidationError> {
    match patch {
        Patch::Absent => Ok(None),
        Patch::Null => Err(ValidationError::NullField(field)),
        Patch::Value(value) => Ok(Some(value)),
    }
}
