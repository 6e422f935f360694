//! CLI command implementations.

pub mod message;
pub mod post;
pub mod render;
