//! Core domain types
//!
//! Repository configurations as the management API reads and writes them.

pub mod kind;
pub mod repository;
