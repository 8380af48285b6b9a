//! Progress events - atoms the presentation layer renders.

use serde::{Deserialize, Serialize};

use crate::badge::Badge;
use crate::ids::StepId;
use crate::Time;

/// Something that happened to the tracked progress at a specific time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// When it happened
    pub timestamp: Time,

    /// What happened
    pub kind: EventKind,
}

impl Event {
    /// Create a new event stamped with the current time.
    pub fn new(kind: EventKind) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            kind,
        }
    }
}

/// The kinds of progress events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A step was completed and points were awarded.
    StepCompleted {
        /// The completed step.
        step: StepId,
        /// Points awarded for it.
        points: u64,
    },

    /// A module was finished and its badge unlocked.
    BadgeUnlocked {
        /// The freshly unlocked badge.
        badge: Badge,
    },

    /// The last locked badge was just unlocked.
    AllBadgesUnlocked,

    /// Progress was reset to defaults.
    Reset,
}
