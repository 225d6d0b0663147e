// ── Core error types ──
//
// Failures that can occur while loading or querying a catalog. Filtering
// and view building never fail; only catalog sources can be malformed.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Catalog source errors ────────────────────────────────────────
    #[error("Failed to parse catalog {source_name}: {message}")]
    Parse {
        /// File path or `"built-in"`.
        source_name: String,
        message: String,
    },

    #[error("Duplicate device id in catalog {source_name}: {id}")]
    DuplicateId { source_name: String, id: String },

    #[error("Cannot read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Device not found: {id}")]
    DeviceNotFound { id: String },
}
