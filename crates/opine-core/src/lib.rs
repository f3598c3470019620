#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod session;

// Re-export commonly used types for convenience
pub use domain::{AccountModel, SurveyModel};
pub use paths::{PathError, account_file_path, data_root};
pub use ports::{
    AccountRepository, AddAccount, AddAccountParams, Authentication, AuthenticationParams,
    DomainError, DomainResult, LoadSurveyList, RepositoryError,
};
pub use session::Session;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
