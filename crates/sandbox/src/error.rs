//! Error type for sandbox construction and decoding.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SandboxError {
    #[error("sandbox dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("sandbox dimensions {width}x{height} exceed the addressable grid size")]
    TooLarge { width: usize, height: usize },

    #[error("failed to allocate a buffer of {cells} tiles")]
    Allocation { cells: usize },

    #[error("unknown tile type id {0}")]
    UnknownTileType(u8),

    #[error("unknown size preset {0:?} (expected small, medium or large)")]
    UnknownPreset(String),
}
