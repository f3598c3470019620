//! File implementation of the `AccountRepository` trait.

use std::path::PathBuf;

use async_trait::async_trait;

use opine_core::paths::account_file_path;
use opine_core::{AccountModel, AccountRepository, PathError, RepositoryError};

/// File implementation of the `AccountRepository` trait.
///
/// Stores the current account as a pretty-printed JSON file so it stays
/// inspectable with a text editor. An absent file means no stored session.
pub struct FileAccountRepository {
    path: PathBuf,
}

impl FileAccountRepository {
    /// Create a repository backed by the given file.
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a repository at the platform-default location.
    pub fn from_default_location() -> Result<Self, PathError> {
        Ok(Self::new(account_file_path()?))
    }
}

fn storage_err(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

#[async_trait]
impl AccountRepository for FileAccountRepository {
    async fn save(&self, account: &AccountModel) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(storage_err)?;
        }
        let json = serde_json::to_string_pretty(account).map_err(storage_err)?;
        tokio::fs::write(&self.path, json).await.map_err(storage_err)?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    async fn load(&self) -> Result<Option<AccountModel>, RepositoryError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(storage_err),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_err(err)),
        }
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_err(err)),
        }
    }
}
