//! Shared primitives: progress fraction, kurbo re-exports and the error taxonomy.

/// Progress fraction and geometric primitive re-exports.
pub mod core;
/// Error types.
pub mod error;
