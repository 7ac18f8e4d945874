mod get_about_page;
mod get_home_page;

pub use get_about_page::{AboutPageContext, AboutSkill, GetAboutPageError, GetAboutPageUseCase};
pub use get_home_page::{
    GetHomePageError, GetHomePageUseCase, HomePageContext, FEATURED_PROJECTS_LIMIT,
};
