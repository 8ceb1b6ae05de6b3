//! Landing page sections, in page order:
//! Navbar, Hero, FeatureBento, Pricing, Steps, Testimonials, Footer

mod features;
mod footer;
mod hero;
mod navbar;
mod pricing;
mod steps;
mod testimonials;
#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use features::FeatureBento;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use steps::Steps;
pub use testimonials::Testimonials;
