use thiserror::Error;

/// Error taxonomy of the core. Every variant except `Store`, `Serde` and
/// `LockPoisoned` is recoverable by the user and meant to surface as a
/// message at the boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or malformed (blank customer name,
    /// empty cart, invalid menu price, ...).
    #[error("{0}")]
    Validation(String),

    #[error("email is already registered")]
    DuplicateEmail,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("passwords do not match")]
    PasswordMismatch,

    /// Monetary or count field out of range (salary <= 0, negative sale
    /// amount, negative headcount).
    #[error("{0}")]
    InvalidAmount(String),

    /// No user is logged in. Callers route this to the login page.
    #[error("login required")]
    Unauthenticated,

    /// A user is logged in but the role is not permitted. Callers route
    /// this to the home page.
    #[error("insufficient permissions")]
    Unauthorized,

    #[error("storage error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    LockPoisoned,
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Error::InvalidAmount(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
