//! Repository Module
//!
//! Free functions over a pool or a connection, one module per table.

pub mod prompt;
pub mod tag;
