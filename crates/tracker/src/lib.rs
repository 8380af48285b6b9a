//! Progress Tracking
//!
//! The service layer between the pure progress state and its persistence:
//! applies mutations, persists after every change, emits events for the
//! presentation layer, and computes derived progress views.

#![warn(missing_docs)]

pub mod snapshot;
pub mod tracker;

pub use snapshot::{ModuleSnapshot, ProgressSnapshot};
pub use tracker::Tracker;
