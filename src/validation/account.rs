use crate::core::error::AccountError;

/// Reject an empty required text field.
///
/// Only the empty string fails; whitespace is kept as given.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AccountError> {
    if value.is_empty() {
        return Err(AccountError::empty_field(field));
    }
    Ok(())
}

/// Validate the identity fields of a new account
pub fn validate_identity(username: &str, email: &str) -> Result<(), AccountError> {
    require_non_empty("username", username)?;
    require_non_empty("email", email)?;
    Ok(())
}
