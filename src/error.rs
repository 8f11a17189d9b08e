// src/error.rs
//
// Errors raised while building a `WrapConfig`. The reflow pipeline itself
// accepts any sequence of lines and never fails.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("row limit must be at least 1, got {0}")]
    RowLimit(usize),

    #[error("protected pair {index} has an empty marker (open: {open:?}, close: {close:?})")]
    EmptyMarker {
        index: usize,
        open: String,
        close: String,
    },

    #[error("indent marker {0} is empty")]
    EmptyIndentMarker(usize),
}
