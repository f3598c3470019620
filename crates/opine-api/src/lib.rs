#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod authorized;
mod config;
mod error;
mod http;
mod models;
mod remote;

// ============================================================================
// Public API
// ============================================================================

// Configuration
pub use config::ApiConfig;

// Errors below the status-mapping layer
pub use error::{ApiError, ApiResult};

// HTTP-client port and production adapter
pub use http::{HttpClient, HttpResponse, ReqwestClient};

// Token-injecting decorator
pub use authorized::{ACCESS_TOKEN_HEADER, AuthorizedHttpClient};

// Remote use cases
pub use remote::{
    DefaultAddAccount, DefaultAuthentication, DefaultSurveyList, RemoteAddAccount,
    RemoteAuthentication, RemoteSurveyList,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
