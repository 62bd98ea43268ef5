//! Contact form endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::{ContactMessage, ContactMessageRequest};
use persistence::repositories::ContactMessageRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_contact_message;

/// Store a contact form submission.
///
/// POST /api/contact
pub async fn submit_contact_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    let repo = ContactMessageRepository::new(state.store.clone());
    let message = repo.create(request).await;

    record_contact_message();
    info!(
        message_id = message.id,
        subject = %message.subject,
        "Contact message received"
    );

    Ok((StatusCode::CREATED, Json(message)))
}
