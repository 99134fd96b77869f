//! Error taxonomy for registry loading and scanning.

use thiserror::Error;

/// Errors raised while loading or compiling a [`crate::registry::PatternRegistry`].
///
/// These are always fatal for engine construction — a caller cannot recover
/// a partially-loaded registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("I/O error reading registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse registry JSON at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("registry missing or corrupt: {0}")]
    Missing(String),

    #[error(
        "registry inconsistent: pattern {id} in class {class} has body {body:?}, \
         which is invalid for kind {kind:?}"
    )]
    Inconsistent {
        class: String,
        id: u32,
        body: String,
        kind: &'static str,
    },

    #[error("failed to compile pattern {id} ({body:?}) in class {class}: {message}")]
    CompileFailure {
        class: String,
        id: u32,
        body: String,
        message: String,
    },
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Errors raised by a single `scan()` call.
///
/// This is the only error surfaced to the public API — detector-internal
/// exceptional conditions never escape as an `Err`.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(
        "sequence contains invalid character {character:?} at position {position}; \
         expected one of A, C, G, T, N"
    )]
    InvalidAlphabet { position: usize, character: char },
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
