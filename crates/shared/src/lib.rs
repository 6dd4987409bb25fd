//! Shared utilities and common types for the support bot backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Keyset pagination cursors and page limits

pub mod pagination;
