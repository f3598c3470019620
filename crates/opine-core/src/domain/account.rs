//! Account domain model.

use serde::{Deserialize, Serialize};

/// An authenticated account, as resolved by the login and signup use cases.
///
/// Ownership passes to the caller, which decides whether to persist it
/// through the [`AccountRepository`](crate::ports::AccountRepository) port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    /// Bearer token used to authorize subsequent API calls.
    pub access_token: String,
    /// Display name of the account holder.
    pub name: String,
}

impl AccountModel {
    /// Create an account from its parts.
    pub fn new(access_token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_new() {
        let account = AccountModel::new("token", "Ana");
        assert_eq!(account.access_token, "token");
        assert_eq!(account.name, "Ana");
    }
}
