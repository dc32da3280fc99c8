//! Error handling for the CEA extraction pipeline
//!
//! This module provides a unified error type and result type for the
//! parse/aggregate/export pipeline, plus the non-fatal warning type the
//! parser collects while it works.

use std::fmt;

/// Pipeline error type
#[derive(Debug, Clone)]
pub enum CeaError {
    /// The input report could not be read (missing file, permissions)
    DocumentUnavailable { path: String, message: String },
    /// The output sink rejected the serialization
    ExportFailure { path: String, message: String },
    /// Invalid input (bad arguments, unusable paths)
    InvalidInput { message: String },
}

impl fmt::Display for CeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CeaError::DocumentUnavailable { path, message } => {
                write!(f, "Cannot read input file '{}': {}", path, message)
            }
            CeaError::ExportFailure { path, message } => {
                write!(f, "Export to '{}' failed: {}", path, message)
            }
            CeaError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for CeaError {}

/// Result type for pipeline operations
pub type CeaResult<T> = Result<T, CeaError>;

// Convenience constructors for errors
impl CeaError {
    pub fn document_unavailable(path: impl Into<String>, cause: impl fmt::Display) -> Self {
        CeaError::DocumentUnavailable {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    pub fn export(path: impl Into<String>, cause: impl fmt::Display) -> Self {
        CeaError::ExportFailure {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        CeaError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Parse warnings (non-fatal issues, pipeline continues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub message: String,
    /// 0-based index of the block the warning came from, if any
    pub block: Option<usize>,
}

impl ParseWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            block: None,
        }
    }

    pub fn in_block(message: impl Into<String>, block: usize) -> Self {
        Self {
            message: message.into(),
            block: Some(block),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(b) = self.block {
            write!(f, "Warning in block {}: {}", b + 1, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}
