//! Data Transfer Objects
//!
//! Lightweight shapes returned by listing endpoints.

pub mod repository;
