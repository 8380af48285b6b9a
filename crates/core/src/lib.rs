//! Questlog core data models.
//!
//! This crate defines the curriculum tables and the progress state object
//! that power the tutorial progress tracker. Everything here is pure: no
//! I/O, no globals, so the whole state machine is unit-testable on its own.

#![warn(missing_docs)]

// Core identities
mod ids;

// Curriculum and achievements
mod badge;
mod curriculum;

// Progress state
mod progress;
mod event;

mod error;

// Re-exports
pub use ids::{ModuleId, ParseStepError, StepId, MODULE_COUNT};

pub use badge::{Badge, Badges};
pub use curriculum::{curriculum, module_spec, total_steps, ModuleSpec};

pub use progress::{Progress, StepCompletion};
pub use event::{Event, EventKind};

pub use error::Error;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
