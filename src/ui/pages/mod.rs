//! Application pages module
//!
//! - Landing page (home)
//! - Not found page

mod landing;
mod not_found;

pub use landing::{LandingPage, LandingSections};
pub use not_found::NotFoundPage;
