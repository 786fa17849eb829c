// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Model errors.
//!
//! There is exactly one error kind: an index outside `[0, len)` handed
//! to a list or selection operation. A correctly synchronized host can
//! never produce it, so callers treat it as a logic bug rather than a
//! recoverable condition. Every erroring operation leaves its inputs
//! untouched.

use thiserror::Error;

/// A specialized `Result` for block model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Error raised by list and selection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An index was outside the bounds of the social link list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ModelError {
    /// Bounds-check `index` against a list of length `len`.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(ModelError::IndexOutOfRange { index, len })
        }
    }
}
