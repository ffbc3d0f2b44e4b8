// Centralized error handling for account construction

use thiserror::Error;

/// Errors that can occur while building an account
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AccountError {
    /// Error for a required text field that was left empty
    pub fn empty_field(field: &str) -> Self {
        AccountError::InvalidArgument(format!("{} cannot be empty", field))
    }
}
