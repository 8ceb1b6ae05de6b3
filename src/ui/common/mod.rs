//! Common reusable UI components
//!
//! Shared by several landing sections: call-to-action links/buttons and the
//! media overlay used by the hero demo.

pub mod button;
pub mod modal;

pub use button::{CtaButton, CtaLink, CtaSize, CtaVariant};
pub use modal::MediaModal;
