use crate::providers::ProviderError;
use crate::query::MissingLocationError;
use thiserror::Error;

/// Request-level search failures
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query had no usable location
    #[error(transparent)]
    MissingLocation(#[from] MissingLocationError),

    /// Network failure or timeout talking to the listing provider
    #[error("Error fetching properties: {message}")]
    ProviderTransport { message: String, timed_out: bool },

    #[error("Too many requests to listing provider")]
    ProviderRateLimit,

    /// Provider rejected our credentials
    #[error("Invalid listing provider credentials")]
    ProviderAuth,

    #[error("No properties found in {location}")]
    NoResults { location: String },

    #[error("Unexpected error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl From<ProviderError> for SearchError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Auth => SearchError::ProviderAuth,
            ProviderError::RateLimited => SearchError::ProviderRateLimit,
            ProviderError::Timeout => SearchError::ProviderTransport {
                message: e.to_string(),
                timed_out: true,
            },
            ProviderError::Transport(message) => SearchError::ProviderTransport {
                message,
                timed_out: false,
            },
            ProviderError::NoResults { location } => SearchError::NoResults { location },
            e @ (ProviderError::Api { .. } | ProviderError::InvalidResponse(_)) => {
                SearchError::Internal(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_mapping() {
        assert!(matches!(
            SearchError::from(ProviderError::Auth),
            SearchError::ProviderAuth
        ));
        assert!(matches!(
            SearchError::from(ProviderError::RateLimited),
            SearchError::ProviderRateLimit
        ));
        assert!(matches!(
            SearchError::from(ProviderError::Timeout),
            SearchError::ProviderTransport { timed_out: true, .. }
        ));
        assert!(matches!(
            SearchError::from(ProviderError::Transport("refused".into())),
            SearchError::ProviderTransport { timed_out: false, ref message } if message == "refused"
        ));
        assert!(matches!(
            SearchError::from(ProviderError::NoResults { location: "X".into() }),
            SearchError::NoResults { ref location } if location == "X"
        ));
    }

    #[test]
    fn test_unexpected_provider_errors_keep_cause() {
        let err = SearchError::from(ProviderError::Api {
            status: 503,
            message: "maintenance".into(),
        });
        let SearchError::Internal(cause) = &err else {
            panic!("expected internal error, got {:?}", err);
        };
        assert!(matches!(
            cause.downcast_ref::<ProviderError>(),
            Some(ProviderError::Api { status: 503, .. })
        ));
        assert!(err.to_string().contains("maintenance"));
    }
}
