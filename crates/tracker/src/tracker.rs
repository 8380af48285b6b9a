//! Progress tracking service.

use questlog_core::{Event, EventKind, Progress, StepId};
use questlog_storage::{ProgressStore, Result, StorageError};
use tracing::{info, warn};

use crate::snapshot::ProgressSnapshot;

/// Owns the progress state and its persistence.
///
/// Every mutation goes through the tracker so the persisted snapshot is
/// rewritten after each change; the presentation layer only sees the
/// events and snapshots it hands out.
pub struct Tracker<S: ProgressStore> {
    state: Progress,
    store: S,
}

impl<S: ProgressStore> Tracker<S> {
    /// Open a tracker on the given store.
    ///
    /// A persisted snapshot is restored when present; an absent entry
    /// means a fresh start, and a malformed one falls back to defaults
    /// with a warning. Other storage failures propagate.
    pub async fn open(store: S) -> Result<Self> {
        let state = match store.load().await {
            Ok(Some(mut progress)) => {
                progress.normalize();
                info!(
                    points = progress.total_points(),
                    steps = progress.completed_count(),
                    "restored progress snapshot"
                );
                progress
            }
            Ok(None) => Progress::new(),
            Err(StorageError::Json(e)) => {
                warn!(error = %e, "progress snapshot is malformed, starting fresh");
                Progress::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self { state, store })
    }

    /// Mark a step complete.
    ///
    /// Returns the events produced by the completion, in the order they
    /// should be presented. An already-complete step produces no events
    /// and does not touch storage.
    pub async fn complete_step(&mut self, step: StepId) -> Result<Vec<Event>> {
        let Some(outcome) = self.state.complete_step(step) else {
            return Ok(Vec::new());
        };

        self.store.save(&self.state).await?;

        let mut events = vec![Event::new(EventKind::StepCompleted {
            step: outcome.step,
            points: outcome.points,
        })];
        if let Some(badge) = outcome.badge_unlocked {
            info!(badge = %badge, "badge unlocked");
            events.push(Event::new(EventKind::BadgeUnlocked { badge }));
        }
        if outcome.roster_complete {
            events.push(Event::new(EventKind::AllBadgesUnlocked));
        }
        Ok(events)
    }

    /// Reset all progress and clear the persisted snapshot.
    pub async fn reset(&mut self) -> Result<Vec<Event>> {
        self.state.reset();
        self.store.clear().await?;
        info!("progress reset");
        Ok(vec![Event::new(EventKind::Reset)])
    }

    /// The current state.
    pub fn state(&self) -> &Progress {
        &self.state
    }

    /// True iff every badge has been unlocked.
    pub fn all_badges_unlocked(&self) -> bool {
        self.state.all_badges_unlocked()
    }

    /// Take a derived progress snapshot.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::capture(&self.state)
    }
}
