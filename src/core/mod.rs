//! Page content, interaction state and server-side plumbing

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod interaction;

pub use interaction::{DemoModal, NavMenu, PointerTarget};
