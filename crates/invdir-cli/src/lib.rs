//! CLI library components for the investor directory builder.

pub mod build;
pub mod logging;
