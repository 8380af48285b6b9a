//! Storage abstraction and implementations for Questlog.
//!
//! This crate provides a trait-based persistence interface for the single
//! progress snapshot, with a JSON-file reference implementation and an
//! in-memory implementation for tests.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_store;
pub mod memory;

pub use trait_::{ProgressStore, Result, StorageError};
pub use json_store::JsonStore;
pub use memory::MemoryStore;
