pub mod contact_message_repository;
pub mod contact_notifier;

pub use contact_message_repository::{
    ContactMessageRecord, ContactMessageRepository, ContactMessageRepositoryError,
};
pub use contact_notifier::ContactNotifier;
