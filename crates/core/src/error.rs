//! Core error type.

/// Errors produced by the core domain model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Module id outside the curriculum (valid ids are 1 through 5).
    #[error("module {0} is not part of the curriculum")]
    InvalidModule(u8),

    /// Step numbers start at 1.
    #[error("step number {0} is invalid")]
    InvalidStep(u8),
}
