//! Domain logic for the interface configuration loader.
//!
//! Holds everything that does not need a database: reading the
//! configuration document, the tracked interface types, and the shared
//! type aliases used by the `db` and `loader` crates.

pub mod document;
pub mod error;
pub mod interface;
pub mod types;
