use thiserror::Error;

/// Errors surfaced by account construction and persistence.
///
/// Nothing here is retried or swallowed inside the crate; every failure
/// propagates unchanged to the caller.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Creation was attempted with an empty email. Raised before any
    /// persistence happens.
    #[error("the email value must be set")]
    EmptyEmail,

    /// The storage layer rejected the email under its unique constraint.
    #[error("email already exists")]
    DuplicateEmail,

    /// An update targeted an employee the store does not hold.
    #[error("employee not found")]
    NotFound,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
