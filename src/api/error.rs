use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::{
    error::{Error, Hint},
    generator::RunFailure,
    report,
    types::{ArtistLine, ErrorBody},
};

/// Request-level failure as the browser sees it. A run that failed after
/// the lineup was searched keeps its per-artist lines.
#[derive(Debug)]
pub struct ApiError {
    pub error: Error,
    pub lines: Vec<ArtistLine>,
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError {
            error,
            lines: Vec::new(),
        }
    }
}

impl From<RunFailure> for ApiError {
    fn from(failure: RunFailure) -> Self {
        ApiError {
            lines: report::artist_lines(&failure.artists),
            error: failure.error,
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.error.is_input_error() {
            StatusCode::BAD_REQUEST
        } else if self.error.is_auth_error() {
            StatusCode::UNAUTHORIZED
        } else if matches!(self.error, Error::NothingToAdd) {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.error.to_string();
        let body = ErrorBody {
            advice: Hint::classify(&message)
                .advice()
                .iter()
                .map(|a| a.to_string())
                .collect(),
            // the page drops its stored blob when told the session is gone
            logged_out: self.error.is_auth_error(),
            error: message,
            lines: self.lines,
        };
        (status, Json(body)).into_response()
    }
}
