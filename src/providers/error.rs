use thiserror::Error;

/// Listing provider errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 401 from the provider
    #[error("Invalid listing provider credentials")]
    Auth,

    /// 429 from the provider
    #[error("Too many requests to listing provider")]
    RateLimited,

    /// Request exceeded the configured timeout
    #[error("Listing provider request timed out")]
    Timeout,

    /// Connection failed before a response arrived
    #[error("Listing provider request failed: {0}")]
    Transport(String),

    /// Successful request, but nothing listed for the location
    #[error("No properties found in {location}")]
    NoResults { location: String },

    /// Any other non-2xx status or an error payload
    #[error("Listing provider error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Body was not the JSON shape we expect
    #[error("Invalid response from listing provider: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::InvalidResponse(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}
