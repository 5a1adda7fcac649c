//! Core error types for arixc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for arena allocation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// The allocator (or the arena's configured limit) could not supply memory
    #[error("Arena out of memory: failed to allocate {requested} bytes")]
    OutOfMemory { requested: usize },

    /// Rounding the request up to the arena alignment overflowed
    #[error("Allocation size overflow: {size} bytes cannot be aligned")]
    SizeOverflow { size: usize },
}

/// Error type for growable vector operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrowVecError {
    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    OutOfBounds { index: usize, length: usize },
}

/// Result type alias for arena operations
pub type ArenaResult<T> = std::result::Result<T, ArenaError>;

/// Result type alias for growable vector operations
pub type GrowVecResult<T> = std::result::Result<T, GrowVecError>;
