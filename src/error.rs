/*!
 * Error types for the voxbridge library.
 *
 * Only failures raised before a connection request has been issued appear
 * here. Anything that goes wrong after `start()` has returned is reported
 * through the tracing side channel on the event-forwarding task and never
 * propagated to the caller.
 */

use thiserror::Error;

/// Errors a session can raise from `start()`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Region or token was absent or empty at start time.
    #[error("valid credentials for the speech service not found")]
    MissingCredentials,

    /// The audio or recognition configuration could not be constructed.
    #[error("speech service setup error: {0}")]
    Configuration(String),

    /// `start()` was called while a connection is already pending or active.
    #[error("session already has an active connection")]
    AlreadyActive,
}

/// Errors from the supported-language reference table.
#[derive(Debug, Error)]
pub enum LanguageError {
    /// The requested key is not in the table.
    #[error("unsupported language key: {0}")]
    UnknownLanguage(String),
}
