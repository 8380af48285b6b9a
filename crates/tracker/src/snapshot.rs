//! Derived progress views.

use chrono::{DateTime, Utc};
use questlog_core::{curriculum, Badge, ModuleId, Progress};

/// A snapshot of overall progress at a point in time.
///
/// This is the data behind every progress indicator: the points counter,
/// the badge tally, the overall bar, and the per-module rows.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    /// When snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Total points earned
    pub total_points: u64,

    /// Unlocked badges out of the full roster
    pub badges_unlocked: usize,

    /// Completed steps across the curriculum
    pub completed_steps: usize,

    /// Steps in the whole curriculum
    pub total_steps: usize,

    /// Overall completion percentage (0-100)
    pub percentage: f32,

    /// Per-module progress rows, in curriculum order
    pub modules: Vec<ModuleSnapshot>,
}

/// Progress of a single module.
#[derive(Debug, Clone)]
pub struct ModuleSnapshot {
    /// The module
    pub module: ModuleId,

    /// Module title
    pub title: &'static str,

    /// Completed steps
    pub completed: usize,

    /// Steps required to finish the module
    pub required: usize,

    /// Completion percentage (0-100)
    pub percentage: f32,

    /// The badge this module awards
    pub badge: Badge,

    /// Whether that badge is unlocked
    pub badge_unlocked: bool,
}

impl ProgressSnapshot {
    /// Compute a snapshot of the given state, stamped with the current time.
    pub fn capture(progress: &Progress) -> Self {
        let modules = curriculum()
            .iter()
            .map(|spec| {
                let completed = progress.completed_in(spec.id());
                ModuleSnapshot {
                    module: spec.id(),
                    title: spec.title,
                    completed,
                    required: spec.steps_required,
                    percentage: (completed as f32 / spec.steps_required as f32) * 100.0,
                    badge: spec.badge,
                    badge_unlocked: progress.badges().is_unlocked(spec.badge),
                }
            })
            .collect();

        Self {
            timestamp: Utc::now(),
            total_points: progress.total_points(),
            badges_unlocked: progress.badges().unlocked_count(),
            completed_steps: progress.completed_count(),
            total_steps: questlog_core::total_steps(),
            percentage: progress.overall_percentage(),
            modules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questlog_core::StepId;

    fn step(m: u8, s: u8) -> StepId {
        StepId::new(ModuleId::new(m).unwrap(), s).unwrap()
    }

    #[test]
    fn snapshot_of_fresh_state_is_all_zero() {
        let snapshot = ProgressSnapshot::capture(&Progress::new());
        assert_eq!(snapshot.total_points, 0);
        assert_eq!(snapshot.badges_unlocked, 0);
        assert_eq!(snapshot.percentage, 0.0);
        assert_eq!(snapshot.modules.len(), 5);
        assert!(snapshot.modules.iter().all(|m| m.completed == 0));
    }

    #[test]
    fn module_rows_follow_the_state() {
        let mut progress = Progress::new();
        progress.complete_step(step(4, 1));
        progress.complete_step(step(4, 2));

        let snapshot = ProgressSnapshot::capture(&progress);
        let row = &snapshot.modules[3];
        assert_eq!(row.completed, 2);
        assert_eq!(row.required, 3);
        assert!(!row.badge_unlocked);
        assert!((row.percentage - 200.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn finished_module_row_shows_its_badge() {
        let mut progress = Progress::new();
        progress.complete_step(step(5, 1));
        progress.complete_step(step(5, 2));

        let snapshot = ProgressSnapshot::capture(&progress);
        let row = &snapshot.modules[4];
        assert_eq!(row.percentage, 100.0);
        assert_eq!(row.badge, Badge::Hero);
        assert!(row.badge_unlocked);
        assert_eq!(snapshot.badges_unlocked, 1);
    }

    #[test]
    fn overall_numbers_match_the_curriculum() {
        let snapshot = ProgressSnapshot::capture(&Progress::new());
        assert_eq!(snapshot.total_steps, 18);
        assert_eq!(
            snapshot.modules.iter().map(|m| m.required).sum::<usize>(),
            18
        );
    }
}
