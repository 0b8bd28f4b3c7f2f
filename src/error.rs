/// Reasons an upload could not be confirmed. None of these reach callers of
/// `forward_upload`; they all collapse to the fallback URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForwardError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Gateway did not respond in time")]
    Timeout,

    #[error("Gateway rejected upload {status}: {body}")]
    GatewayRejection { status: u16, body: String },

    #[error("Failed to parse gateway response: {0}")]
    MalformedResponse(String),

    #[error("Gateway reported failure (success={success}, error={error:?})")]
    Payload { success: bool, error: Option<String> },
}

impl ForwardError {
    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            ForwardError::Transport(_) => "transport",
            ForwardError::Timeout => "timeout",
            ForwardError::GatewayRejection { .. } => "gateway_rejection",
            ForwardError::MalformedResponse(_) => "malformed_response",
            ForwardError::Payload { .. } => "payload",
        }
    }
}

impl From<reqwest::Error> for ForwardError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ForwardError::Timeout
        } else if e.is_decode() {
            ForwardError::MalformedResponse(e.to_string())
        } else {
            ForwardError::Transport(e.to_string())
        }
    }
}
