//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Result model (ScanReport, RankedList) and error types
//! - Validated extraction configuration
//! - Rendering functions for different output formats
//! - Path normalization utilities
//! - File reading with binary detection

pub mod config;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
