//! Documentation generation core
//!
//! This module turns a [`crate::node::SourceUnit`] into the Markdown API
//! reference and holds the configuration that drives it.

pub mod config;
pub mod fragment;
mod markdown;

pub use config::DocConfig;
pub use fragment::{Fragment, Section};
pub use markdown::MarkdownRenderer;
