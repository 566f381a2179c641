/// Errors from the project tracker client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a failed envelope, or with a body that
    /// was not an envelope at all. `message` is what a user should see.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        message: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Text to surface to the user, verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
