//! Utility modules
//!
//! This module contains shared support code:
//! - Error types and result types
//! - Parse warnings

pub mod error;

// Re-export commonly used items
pub use error::{CeaError, CeaResult, ParseWarning};
