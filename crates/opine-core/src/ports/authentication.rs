//! Login port trait.

use async_trait::async_trait;
use serde::Serialize;

use super::error::DomainResult;
use crate::domain::AccountModel;

/// Credentials submitted on login.
///
/// Serializes to the wire field names the API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationParams {
    /// Account e-mail address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Port trait for the login use case.
///
/// The remote implementation lives in `opine-api`. A single invocation
/// issues exactly one request and resolves to the authenticated account or
/// one of the domain errors:
///
/// - [`DomainError::InvalidCredentials`](super::DomainError::InvalidCredentials)
///   when the server rejects the credentials
/// - [`DomainError::Unexpected`](super::DomainError::Unexpected) for every
///   other failure
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Exchange credentials for an account.
    async fn auth(&self, params: &AuthenticationParams) -> DomainResult<AccountModel>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn Authentication>) {}

    #[test]
    fn test_params_serialize_to_wire_names() {
        let params = AuthenticationParams {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["password"], "secret");
    }
}
