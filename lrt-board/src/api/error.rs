//! Light Rail API client error types.

/// Errors from the Light Rail HTTP client.
///
/// The `ScheduleSource` boundary collapses all of these to a bare
/// absence; the taxonomy exists so the diagnostic that gets logged
/// says what actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded the client timeout
    #[error("request timed out")]
    Timeout,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Http(err)
        }
    }
}
