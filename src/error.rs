use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::store::StoreError;
use crate::weather::WeatherError;

pub struct InternalError {
    pub message: String,
}

impl InternalError {
    pub fn new(message: String) -> InternalError {
        InternalError { message }
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        error!("error encountered while processing request: {}", self.message);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

impl From<StoreError> for InternalError {
    fn from(err: StoreError) -> Self {
        InternalError::new(format!("failed to store reading: {err}"))
    }
}

impl From<WeatherError> for InternalError {
    fn from(err: WeatherError) -> Self {
        InternalError::new(format!("weather lookup failed: {err}"))
    }
}
