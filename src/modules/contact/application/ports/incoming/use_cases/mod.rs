pub mod get_contact_page;
pub mod submit_contact;

pub use get_contact_page::{
    ContactPageContext, GetContactPageError, GetContactPageUseCase, NoticeView,
};
pub use submit_contact::{ContactOutcome, SubmitContactError, SubmitContactUseCase};
