//! Shared domain primitives for the Acervo art catalog.
//!
//! Holds the pieces every other crate agrees on: id types, the lookup key
//! used for by-id / by-name operations, the year-range filter and the
//! domain error taxonomy.

pub mod catalog;
pub mod error;
pub mod lookup;
pub mod period;
pub mod types;
