use async_trait::async_trait;

use super::contact_message_repository::ContactMessageRecord;

/// Best-effort notification about a stored message. Never fails the caller;
/// `false` means the notification could not be delivered.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessageRecord) -> bool;
}
