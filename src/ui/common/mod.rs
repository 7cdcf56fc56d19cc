//! Common reusable UI components

pub mod disclosure;

pub use disclosure::{Accordion, Chevron, Dropdown};
