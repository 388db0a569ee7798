//! Backends module - File system access
//!
//! Provides:
//! - scan: recursive file listing with the ignore crate

pub mod scan;
