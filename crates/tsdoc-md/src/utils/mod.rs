//! Utilities for tsdoc-md
//!
//! This module provides the SWC/deno_ast parsing layer the renderer is
//! bound to.

pub mod swc;

pub use swc::{parse_typescript_source, ParsedModule, SourceInfo};
