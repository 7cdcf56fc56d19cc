//! Page state, animation timing and copy, independent of any rendering

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
mod disclosure;
mod reveal;
mod spring;
#[cfg(test)]
mod tests;
mod view_state;

pub use disclosure::*;
pub use reveal::*;
pub use spring::*;
pub use view_state::*;
