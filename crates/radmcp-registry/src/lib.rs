//! # radmcp-registry
//!
//! The tool catalog. Built once at startup, shared read-only by every
//! request and connection afterwards.

pub mod catalog;
pub mod locate;
pub mod registry;

pub use catalog::radius_catalog;
pub use locate::{locate_rad, RadBinary};
pub use registry::ToolRegistry;
