mod about;
mod home;
mod loading;

pub use about::about_handler;
pub use home::home_handler;
pub use loading::loading_handler;
