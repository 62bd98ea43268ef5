//! Contact message repository.

use chrono::Utc;
use domain::models::{ContactMessage, ContactMessageRequest};

use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for contact form submissions.
#[derive(Clone)]
pub struct ContactMessageRepository {
    store: MemoryStore,
}

impl ContactMessageRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Stores a contact message stamped with the current time. The request
    /// is expected to be validated already.
    pub async fn create(&self, request: ContactMessageRequest) -> ContactMessage {
        let timer = OperationTimer::new("create_contact_message");
        let now = Utc::now();
        let message = self
            .store
            .write()
            .await
            .contact_messages
            .insert_with(|id| request.into_message(id, now));
        timer.record();
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_stamps_time_and_id() {
        let repo = ContactMessageRepository::new(MemoryStore::new());
        let before = Utc::now();

        let message = repo
            .create(ContactMessageRequest {
                name: "Alex".to_string(),
                email: "alex@example.com".to_string(),
                subject: "Opening hours".to_string(),
                message: "Are you open on public holidays?".to_string(),
            })
            .await;

        assert_eq!(message.id, 1);
        assert!(message.created_at >= before);
        let stored = repo.store.read().await.contact_messages.all();
        assert_eq!(stored, vec![message]);
    }
}
