pub mod core;
pub mod models;
pub mod utils;
pub mod validation;

pub use crate::core::error::AccountError;
pub use models::account::{Account, AccountStatus};
