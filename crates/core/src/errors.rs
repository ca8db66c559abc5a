//! Core error types for the LifeGuide application.
//!
//! This module defines transport-agnostic error types. Errors coming from the
//! HTTP layer (reqwest, PostgREST, edge functions) are converted to these
//! types by the `supabase` crate.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Every failure is caught at the boundary of the operation that produced it
/// and turned into a user-visible notice; none of these variants is fatal.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Data access failed: {0}")]
    DataAccess(#[from] DataAccessError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// A collaborator (chat, task generation) was reachable but answered with
    /// a failure or a degraded response.
    #[error("Service degraded: {0}")]
    ServiceDegraded(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns true for failures of the remote store or the network.
    pub fn is_data_access(&self) -> bool {
        matches!(self, Error::DataAccess(_))
    }

    /// Returns true when the caller has to (re)authenticate.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

/// Store or network failures.
#[derive(Error, Debug)]
pub enum DataAccessError {
    /// The request did not complete within the transport timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The remote end could not be reached.
    #[error("Remote store unreachable: {0}")]
    Unreachable(String),

    /// The store answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Missing or invalid credentials on a protected operation.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No credential presented")]
    MissingCredential,

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("User not authenticated")]
    NotAuthenticated,
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DataAccess(DataAccessError::InvalidResponse(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
