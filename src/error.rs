//! Unified error handling for Craftworld
//!
//! World and spatial queries deliberately never error: an out-of-range
//! coordinate reads as air and an unknown block id reads as non-solid, so
//! movement and picking code needs no special-casing. Errors are reserved
//! for operations that can genuinely fail, which in this crate means
//! save/load I/O and snapshot decoding.

/// Crate-wide result type
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("save failed for {path}: {source}")]
    SaveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot schema version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
