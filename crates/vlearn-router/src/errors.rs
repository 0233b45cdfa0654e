// File: src/errors.rs
// Purpose: Typed failures for table construction and resolution

use thiserror::Error;

/// Broken route declaration, detected while building a table.
///
/// Path and name uniqueness are construction-time invariants: a
/// declaration that violates them never produces a resolver. Treat this
/// error as fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuplicateRouteError {
    /// Two declarations share a canonical path.
    #[error("duplicate route path {path:?}: declared by both {first:?} and {second:?}")]
    Path {
        /// The colliding canonical path
        path: String,
        /// Name of the earlier declaration
        first: String,
        /// Name of the later declaration
        second: String,
    },

    /// Two declarations share a symbolic name.
    #[error("duplicate route name {name:?}: declared at both {first:?} and {second:?}")]
    Name {
        /// The colliding name
        name: String,
        /// Path of the earlier declaration
        first: String,
        /// Path of the later declaration
        second: String,
    },
}

/// Unmatched navigation request.
///
/// Returned as a value from lookups. The caller decides the fallback,
/// typically a not-found screen; resolution misses are never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    /// No table entry's path equals the canonical request.
    #[error("no route matches path {0:?}")]
    Path(String),

    /// No table entry carries the requested name.
    #[error("no route named {0:?}")]
    Name(String),
}
