//! Flows module - End-to-end commands built from the core pieces
//!
//! Provides:
//! - extract: scan a tree and rank its most frequent keywords

pub mod extract;
