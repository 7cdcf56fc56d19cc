pub mod common;
pub mod icon;
pub mod pages;
pub mod reveal;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use reveal::RevealHeadline;
