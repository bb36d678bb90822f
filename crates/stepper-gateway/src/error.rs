//! HTTP mapping for `StepperError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use stepper_core::error::{ClientCode, StepperError};

/// Wrapper so handlers can `?` core errors into a response.
#[derive(Debug)]
pub struct HttpError(pub StepperError);

impl From<StepperError> for HttpError {
    fn from(e: StepperError) -> Self {
        Self(e)
    }
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::InvalidConfig | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        tracing::error!(code = code.as_str(), error = %self.0, "stepper request failed");
        (status_for(code), Json(json!({ "error": code.as_str() }))).into_response()
    }
}
