use crate::core::error::AccountError;
use crate::utils::time::utc_now;
use crate::validation::account::validate_identity;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info, warn};

/// Whether an account may still be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account.
///
/// Identity fields and the creation time are fixed once constructed. The
/// only mutation is [`Account::deactivate`], which cannot be undone.
#[derive(Clone, Debug)]
pub struct Account {
    /// Caller-supplied identifier
    id: i64,
    /// Never empty
    username: String,
    /// Never empty
    email: String,
    /// Captured at construction, UTC
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl Account {
    /// Create an active account stamped with the current UTC time.
    ///
    /// Fails with [`AccountError::InvalidArgument`] when `username` or
    /// `email` is empty.
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, AccountError> {
        let username = username.into();
        let email = email.into();

        if let Err(e) = validate_identity(&username, &email) {
            warn!(account_id = id, error = %e, "Rejected account");
            return Err(e);
        }

        let account = Self {
            id,
            username,
            email,
            created_at: utc_now(),
            is_active: true,
        };

        debug!(
            account_id = account.id,
            username = %account.username,
            created_at = %account.created_at,
            "Account created"
        );

        Ok(account)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Mark the account inactive. Calling it again has no further effect.
    pub fn deactivate(&mut self) {
        if self.is_active {
            info!(account_id = self.id, username = %self.username, "Account deactivated");
        }
        self.is_active = false;
    }

    pub fn status(&self) -> AccountStatus {
        if self.is_active {
            AccountStatus::Active
        } else {
            AccountStatus::Inactive
        }
    }
}

// Diagnostic only; not a stable format
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Account id={} username='{}'>", self.id, self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active() {
        let account = Account::new(1, "alice", "a@x.com").unwrap();

        assert_eq!(account.id(), 1);
        assert_eq!(account.username(), "alice");
        assert_eq!(account.email(), "a@x.com");
        assert!(account.is_active());
        assert_eq!(account.status(), AccountStatus::Active);
        assert_eq!(account.status().as_str(), "Active");
    }

    #[test]
    fn test_deactivate() {
        let mut account = Account::new(1, "alice", "a@x.com").unwrap();
        account.deactivate();

        assert!(!account.is_active());
        assert_eq!(account.status(), AccountStatus::Inactive);
        assert_eq!(account.status().to_string(), "Inactive");
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut account = Account::new(3, "carol", "c@x.com").unwrap();
        account.deactivate();
        account.deactivate();

        assert_eq!(account.status().as_str(), "Inactive");
    }

    #[test]
    fn test_empty_username_rejected() {
        let result = Account::new(2, "", "b@x.com");
        assert!(matches!(result, Err(AccountError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_email_rejected() {
        let result = Account::new(2, "bob", "");
        assert!(matches!(result, Err(AccountError::InvalidArgument(msg)) if msg.contains("email")));
    }

    #[test]
    fn test_whitespace_fields_accepted() {
        let account = Account::new(4, " ", " ").unwrap();
        assert_eq!(account.status(), AccountStatus::Active);
    }

    #[test]
    fn test_any_integer_id_accepted() {
        for id in [i64::MIN, -1, 0, i64::MAX] {
            let account = Account::new(id, "dave", "d@x.com").unwrap();
            assert_eq!(account.id(), id);
        }
    }

    #[test]
    fn test_created_at_is_construction_time_and_stable() {
        let before = utc_now();
        let mut account = Account::new(5, "erin", "e@x.com").unwrap();
        let after = utc_now();

        let created_at = account.created_at();
        assert!(created_at >= before && created_at <= after);

        let _ = account.status();
        account.deactivate();
        let _ = account.to_string();
        assert_eq!(account.created_at(), created_at);
    }

    #[test]
    fn test_display() {
        let account = Account::new(1, "alice", "a@x.com").unwrap();
        assert_eq!(account.to_string(), "<Account id=1 username='alice'>");
    }

    #[test]
    fn test_display_ignores_status() {
        let mut account = Account::new(9, "frank", "f@x.com").unwrap();
        let active = account.to_string();
        account.deactivate();
        assert_eq!(account.to_string(), active);
    }
}
