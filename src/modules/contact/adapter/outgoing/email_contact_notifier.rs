use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRecord, ContactNotifier,
};
use crate::modules::email::application::ports::outgoing::EmailSender;

/// Mails every stored contact message to the site owner.
#[derive(Clone)]
pub struct EmailContactNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    recipient: String,
}

impl fmt::Debug for EmailContactNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailContactNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl EmailContactNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
        }
    }
}

fn notification_subject(message: &ContactMessageRecord) -> String {
    format!("Portfolio Contact: {}", message.subject)
}

fn notification_body(message: &ContactMessageRecord) -> String {
    format!(
        "New contact form submission:\n\n\
         Name: {}\n\
         Email: {}\n\
         Subject: {}\n\n\
         Message:\n{}\n",
        message.name, message.email, message.subject, message.message
    )
}

#[async_trait]
impl ContactNotifier for EmailContactNotifier {
    async fn notify(&self, message: &ContactMessageRecord) -> bool {
        let subject = notification_subject(message);
        let body = notification_body(message);

        match self.sender.send_email(&self.recipient, &subject, &body).await {
            Ok(()) => {
                info!(message_id = message.id, "Contact notification sent");
                true
            }
            Err(e) => {
                error!(message_id = message.id, "Error sending email: {}", e);
                false
            }
        }
    }
}
