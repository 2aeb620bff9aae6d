use thiserror::Error;

/// Error taxonomy shared by every tool. Failures never cross the tool-call
/// boundary as panics; handlers render them into the response envelope with
/// `isError: true`.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Selector matched zero elements.
    #[error("No elements found matching selector: {selector}")]
    NotFound { selector: String },

    /// Selector matched more than one element while the caller required a
    /// unique target. The message carries full remediation guidance.
    #[error("{message}")]
    Ambiguous {
        selector: String,
        count: usize,
        message: String,
    },

    /// Explicit elementIndex outside [1, total].
    #[error(
        "elementIndex {index} is out of range: '{selector}' matched {count} element(s), valid range is 1..={count}"
    )]
    IndexOutOfRange {
        selector: String,
        index: usize,
        count: usize,
    },

    /// The selector engine rejected the selector string. Message is already
    /// sanitized (stack frames stripped).
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Collaborator-side timeout. Retryable.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Browser session or WebDriver connection lost. Retryable.
    #[error("Browser session lost: {0}")]
    Disconnected(String),

    /// Anything else, with the underlying message appended.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Whether a caller may safely retry the same call.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProbeError::Timeout(_) | ProbeError::Disconnected(_))
    }
}

/// Classify a raw backend/WebDriver error message into the taxonomy by
/// sniffing its text. Selector-syntax errors get sanitized on the way in.
pub fn classify_backend_error(message: &str) -> ProbeError {
    let lower = message.to_lowercase();

    if lower.contains("is not a valid selector") || lower.contains("invalid selector") {
        ProbeError::InvalidSelector(crate::selector::sanitize_engine_error(message))
    } else if lower.contains("timeout") || lower.contains("timed out") {
        ProbeError::Timeout(message.to_string())
    } else if lower.contains("connection")
        || lower.contains("session not")
        || lower.contains("invalid session")
        || lower.contains("webdriver")
        || lower.contains("closed")
    {
        ProbeError::Disconnected(message.to_string())
    } else {
        ProbeError::Other(anyhow::anyhow!("{message}"))
    }
}
