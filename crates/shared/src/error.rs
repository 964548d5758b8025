use thiserror::Error;

/// Failure taxonomy of the one-shot order fetch. Every variant renders as a
/// single displayable message; nothing here crashes the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not complete at all.
    #[error("failed to reach order endpoint: {0}")]
    Network(String),
    /// Non-success HTTP status with a server-supplied message.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Success status but an undecodable payload.
    #[error("unexpected payload from order endpoint: {0}")]
    MalformedResponse(String),
}
