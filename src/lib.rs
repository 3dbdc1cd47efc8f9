//! Stacks application library.
//!
//! Resource clients for the book-system backend plus the declarative route
//! table of navigable views.

pub mod modules;
pub mod routes;

/// Re-export commonly used types
pub use modules::*;
