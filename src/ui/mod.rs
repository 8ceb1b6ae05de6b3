pub mod common;
pub mod icon;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
