use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use convert_case::{Case, Casing};
use domain::models::{BookingError, RegistrationError};
use persistence::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<ValidationDetail>,
    },

    /// The class schedule has no seats left.
    #[error("Class full: {0}")]
    ClassFull(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limited")]
    RateLimited { retry_after_secs: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Validation failure without field details.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDetail {
    /// Field name as it appears in the JSON payload.
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut retry_after = None;
        let (status, error_code, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                (!details.is_empty()).then_some(details),
            ),
            ApiError::ClassFull(msg) => (StatusCode::BAD_REQUEST, "class_full", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::RateLimited { retry_after_secs } => {
                retry_after = Some(retry_after_secs);
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "rate_limited",
                    "Too many requests. Please try again later.".into(),
                    None,
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(axum::http::header::RETRY_AFTER, secs.into());
        }
        response
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationDetail {
                    field: field.to_case(Case::Camel),
                    message: e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));

        ApiError::Validation {
            message: "Invalid data".to_string(),
            details,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(format!("Invalid data: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::validation("Invalid ID format")
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::UserNotFound { .. } | BookingError::ScheduleNotFound { .. } => {
                ApiError::NotFound(err.to_string())
            }
            BookingError::ClassFull { .. } => ApiError::ClassFull(err.to_string()),
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken(_) => ApiError::Conflict(err.to_string()),
            StoreError::InvalidRecord(msg) => ApiError::validation(msg),
            StoreError::Password(_) | StoreError::Task(_) => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_api_error_not_found() {
        let response = ApiError::NotFound("resource not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_conflict() {
        let response = ApiError::Conflict("already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_api_error_internal() {
        let response = ApiError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_rate_limited_sets_retry_after() {
        let response = ApiError::RateLimited {
            retry_after_secs: 12,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(axum::http::header::RETRY_AFTER).unwrap(),
            "12"
        );
    }

    #[tokio::test]
    async fn test_class_full_is_bad_request_with_own_code() {
        let err: ApiError = BookingError::ClassFull { schedule_id: 1 }.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "class_full");
        assert_eq!(body["message"], "Class is full");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let body = body_json(ApiError::Internal("secret detail".into()).into_response()).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[test]
    fn test_booking_errors_map_to_not_found() {
        let user: ApiError = BookingError::UserNotFound { user_id: 9 }.into();
        assert!(matches!(user, ApiError::NotFound(ref m) if m == "User not found"));

        let schedule: ApiError = BookingError::ScheduleNotFound { schedule_id: 9 }.into();
        assert!(matches!(schedule, ApiError::NotFound(ref m) if m == "Class schedule not found"));
    }

    #[test]
    fn test_registration_errors_map_to_not_found() {
        let plan: ApiError = RegistrationError::PlanNotFound { plan_id: 3 }.into();
        assert!(matches!(plan, ApiError::NotFound(ref m) if m == "Membership plan not found"));
    }

    #[test]
    fn test_store_errors() {
        let taken: ApiError = StoreError::UsernameTaken("member".into()).into();
        assert!(matches!(taken, ApiError::Conflict(_)));

        let task: ApiError = StoreError::Task("cancelled".into()).into();
        assert!(matches!(task, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_validation_errors_carry_field_details() {
        let request = domain::models::ContactMessageRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hello there".to_string(),
            message: "Hi".to_string(),
        };
        let err: ApiError = request.validate().unwrap_err().into();
        let body = body_json(err.into_response()).await;

        assert_eq!(body["error"], "validation_error");
        let fields: Vec<_> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, vec!["email", "message", "name"]);
    }

    #[tokio::test]
    async fn test_validation_details_use_wire_field_names() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("user_id", validator::ValidationError::new("range"));
        errors.add("schedule_id", validator::ValidationError::new("range"));
        let err: ApiError = errors.into();
        let body = body_json(err.into_response()).await;

        let fields: Vec<_> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, vec!["scheduleId", "userId"]);
        assert_eq!(body["details"][1]["message"], "range");
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
        assert_eq!(
            format!("{}", ApiError::validation("test")),
            "Validation error: test"
        );
        assert_eq!(
            format!("{}", ApiError::RateLimited { retry_after_secs: 1 }),
            "Rate limited"
        );
    }
}
