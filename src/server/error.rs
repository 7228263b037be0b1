use crate::error::SearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::MissingLocation(_) => StatusCode::BAD_REQUEST,
            SearchError::NoResults { .. } => StatusCode::NOT_FOUND,
            SearchError::ProviderRateLimit => StatusCode::TOO_MANY_REQUESTS,
            SearchError::ProviderTransport { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
            SearchError::ProviderTransport { .. } => StatusCode::BAD_GATEWAY,
            SearchError::ProviderAuth | SearchError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = %status, error = %self, "Search failed");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MissingLocationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SearchError::from(MissingLocationError).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SearchError::NoResults { location: "X".into() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SearchError::ProviderRateLimit.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            SearchError::ProviderTransport { message: "t".into(), timed_out: true }.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            SearchError::ProviderTransport { message: "t".into(), timed_out: false }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            SearchError::ProviderAuth.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SearchError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
