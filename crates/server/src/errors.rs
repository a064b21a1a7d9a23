use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use tracing::{error, warn};

/// Error response rendered as `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.title,
            "detail": self.detail.unwrap_or_else(|| self.title.to_string()),
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let detail = Some(e.detail());
        match e {
            ServiceError::Validation(_) => JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", detail),
            ServiceError::Conflict(_) | ServiceError::Model(ModelError::Conflict(_)) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Conflict", detail)
            }
            ServiceError::NotFound(_) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", detail),
            ServiceError::Model(ModelError::Validation(_)) => {
                warn!(detail = ?detail, "rejected invalid payload");
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", detail)
            }
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                error!(err = %e, "storage failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let title = match status {
            StatusCode::UNPROCESSABLE_ENTITY => "Validation Error",
            s => s.canonical_reason().unwrap_or("Bad Request"),
        };
        warn!(%status, detail = %rejection.body_text(), "rejected request body");
        JsonApiError::new(status, title, Some(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Validation("Customer does not exist".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Conflict("Phone number already exists".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("Customer"), StatusCode::NOT_FOUND),
            (ModelError::Validation("name must not be empty".into()).into(), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Db("disk full".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn detail_carries_service_message() {
        let e = JsonApiError::from(ServiceError::not_found("Appointment"));
        assert_eq!(e.title, "Not Found");
        assert_eq!(e.detail.as_deref(), Some("Appointment not found"));
    }
}
