use thiserror::Error;

use lumina_store::StoreError;

/// Errors surfaced to screens.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store layer failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The flow requires a signed-in identity.
    #[error("Not signed in")]
    SignedOut,

    /// The signed-in identity lacks the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// No directory entry matches the sign-in email.
    #[error("No account matches that email")]
    UnknownEmail,

    /// The draft is missing a required field.
    #[error("Draft is missing {0}")]
    EmptyDraft(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
