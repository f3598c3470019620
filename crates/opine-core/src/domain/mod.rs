//! Domain models shared across the workspace.
//!
//! These are the types use cases resolve to. Wire-format payloads live in
//! `opine-api` and are converted into these at the adapter boundary.

mod account;
mod survey;

pub use account::AccountModel;
pub use survey::SurveyModel;
