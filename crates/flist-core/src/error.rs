//! Error types for F-list

use thiserror::Error;

use crate::auth::AuthErrorCode;

/// Main error type for F-list operations
#[derive(Error, Debug)]
pub enum FlistError {
    /// The interactive sign-in did not complete (overlay or handoff)
    #[error("Sign-in interaction failed: {code}")]
    AuthInteractionFailed { code: AuthErrorCode },

    /// The calling origin is not registered with the identity provider
    #[error("Origin '{hostname}' is not authorized for sign-in")]
    UnauthorizedOrigin { hostname: String },

    /// A point read or subscription setup against the document store failed
    #[error("Remote read failed: {0}")]
    RemoteReadFailed(String),

    /// A merge-write against the document store failed
    #[error("Remote write failed: {0}")]
    RemoteWriteFailed(String),

    /// Operation needs an active session
    #[error("Sign-in required")]
    NotSignedIn,

    /// Item draft is missing a required field
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

impl FlistError {
    /// Message shown to the user in a blocking notice.
    pub fn user_notice(&self) -> String {
        match self {
            FlistError::AuthInteractionFailed { .. } => {
                "Sign-in failed. Please try again.".to_string()
            }
            FlistError::UnauthorizedOrigin { hostname } => format!(
                "Domain '{hostname}' is not authorized for sign-in.\n\n\
                 How to fix:\n\
                 1. Open the identity provider console\n\
                 2. Select the F-list project\n\
                 3. Authentication → Settings → Authorized domains\n\
                 4. Add the current domain and try again"
            ),
            FlistError::RemoteReadFailed(_) => "Failed to load your data.".to_string(),
            FlistError::RemoteWriteFailed(_) => "Failed to save. Please try again.".to_string(),
            FlistError::NotSignedIn => "Sign-in required!".to_string(),
            FlistError::InvalidItem(reason) => reason.clone(),
            other => format!("Something went wrong: {other}"),
        }
    }

    /// True for failures of the document store (read, write, subscription).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            FlistError::RemoteReadFailed(_) | FlistError::RemoteWriteFailed(_)
        )
    }
}

impl From<serde_json::Error> for FlistError {
    fn from(err: serde_json::Error) -> Self {
        FlistError::Serialization(err.to_string())
    }
}

/// Result type alias using FlistError
pub type FlistResult<T> = Result<T, FlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlistError::UnauthorizedOrigin {
            hostname: "closet.example".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Origin 'closet.example' is not authorized for sign-in"
        );
    }

    #[test]
    fn test_unauthorized_notice_names_hostname() {
        let err = FlistError::UnauthorizedOrigin {
            hostname: "closet.example".to_string(),
        };
        assert!(err.user_notice().contains("'closet.example'"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FlistError = io_err.into();
        assert!(matches!(err, FlistError::Io(_)));
        assert!(!err.is_remote());
    }

    #[test]
    fn test_remote_classification() {
        assert!(FlistError::RemoteReadFailed("offline".into()).is_remote());
        assert!(FlistError::RemoteWriteFailed("offline".into()).is_remote());
        assert!(!FlistError::NotSignedIn.is_remote());
    }
}
