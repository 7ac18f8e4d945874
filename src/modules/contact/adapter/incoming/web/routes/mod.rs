mod get_contact_page;
mod submit_contact;

pub use get_contact_page::get_contact_page_handler;
pub use submit_contact::submit_contact_handler;
