use thiserror::Error;

/// Failure of a background round trip to the shop backend.
///
/// Unreadable form input is not an error: it falls back to neutral values
/// before a request is ever made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The server answered with `success: false`.
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no message"))]
    Application(Option<String>),

    /// Network failure, bad status without a readable body, or malformed JSON.
    /// Timeouts, DNS failures and 5xx responses are not told apart.
    #[error("transport error: {0}")]
    Transport(String),
}

impl SyncError {
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        SyncError::Transport(detail.to_string())
    }

    /// Text for the toast. Server messages are shown verbatim.
    pub fn user_message(&self, rejected_fallback: &str, transport_message: &str) -> String {
        match self {
            SyncError::Application(Some(message)) if !message.trim().is_empty() => {
                message.clone()
            }
            SyncError::Application(_) => rejected_fallback.to_string(),
            SyncError::Transport(_) => transport_message.to_string(),
        }
    }
}
