//! Error types for loading and saving cog documents.
//!
//! Parsing itself never fails: malformed lines are skipped and unrecognised
//! values fall back to strings. Only file I/O and a missing save target are
//! reported as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a cog document.
#[derive(Error, Debug)]
pub enum CogError {
    /// The source could not be read or the destination could not be written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `save` was called without a destination and the document was never
    /// loaded from (or bound to) a path.
    #[error("no destination configured: pass a path to save or load from a file first")]
    NoDestination,
}

/// Convenience alias used throughout cog-core.
pub type Result<T> = std::result::Result<T, CogError>;
