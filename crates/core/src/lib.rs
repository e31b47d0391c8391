//! Functional core for movierate.
//!
//! Pure domain types, validation and the storage contract. Nothing in this
//! crate performs I/O; the server crate supplies the repository
//! implementations and the HTTP shell.

pub mod catalog;
pub mod storage;
