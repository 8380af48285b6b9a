//! The progress state object and its pure mutation operations.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::badge::{Badge, Badges};
use crate::curriculum::{module_spec, total_steps};
use crate::ids::{ModuleId, StepId};

/// Outcome of completing a step that was not already complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCompletion {
    /// The step that was completed.
    pub step: StepId,
    /// Points awarded for this step.
    pub points: u64,
    /// Badge unlocked by this completion, if the module just finished.
    pub badge_unlocked: Option<Badge>,
    /// True when the unlock above completed the full badge roster.
    pub roster_complete: bool,
}

/// Accumulated tutorial progress.
///
/// Mutated only by [`Progress::complete_step`] and [`Progress::reset`];
/// persisting and restoring the snapshot is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Total points earned so far.
    total_points: u64,
    /// Badge unlock flags.
    badges: Badges,
    /// Completed-step count per module.
    module_progress: BTreeMap<ModuleId, usize>,
    /// Every completed step, keyed by its `module-step` id.
    completed_steps: BTreeSet<StepId>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            total_points: 0,
            badges: Badges::default(),
            module_progress: ModuleId::all().map(|m| (m, 0)).collect(),
            completed_steps: BTreeSet::new(),
        }
    }
}

impl Progress {
    /// Fresh all-zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a step complete.
    ///
    /// Returns `None` when the step was already complete; completion is
    /// idempotent and a repeat changes nothing. Otherwise awards the
    /// module's fixed reward, bumps the module counter, and unlocks the
    /// module's badge once the counter reaches the required step count.
    pub fn complete_step(&mut self, step: StepId) -> Option<StepCompletion> {
        if !self.completed_steps.insert(step) {
            return None;
        }

        let spec = module_spec(step.module());
        self.total_points += spec.points_per_step;

        let counter = self.module_progress.entry(step.module()).or_insert(0);
        *counter += 1;

        let mut badge_unlocked = None;
        if *counter >= spec.steps_required && !self.badges.is_unlocked(spec.badge) {
            self.badges.unlock(spec.badge);
            badge_unlocked = Some(spec.badge);
        }

        Some(StepCompletion {
            step,
            points: spec.points_per_step,
            badge_unlocked,
            roster_complete: badge_unlocked.is_some() && self.badges.all_unlocked(),
        })
    }

    /// Restore the all-zero default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True iff every badge has been unlocked.
    pub fn all_badges_unlocked(&self) -> bool {
        self.badges.all_unlocked()
    }

    /// Total points earned.
    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    /// Badge unlock flags.
    pub fn badges(&self) -> &Badges {
        &self.badges
    }

    /// Completed-step count for one module.
    pub fn completed_in(&self, module: ModuleId) -> usize {
        self.module_progress.get(&module).copied().unwrap_or(0)
    }

    /// Completed-step count across all modules.
    pub fn completed_count(&self) -> usize {
        self.completed_steps.len()
    }

    /// Whether a step has been completed.
    pub fn is_completed(&self, step: StepId) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Completed steps in id order.
    pub fn completed_steps(&self) -> impl Iterator<Item = StepId> + '_ {
        self.completed_steps.iter().copied()
    }

    /// Fraction of the curriculum completed, as a percentage.
    pub fn overall_percentage(&self) -> f32 {
        (self.completed_count() as f32 / total_steps() as f32) * 100.0
    }

    /// Recompute the per-module counters from the completed-step set.
    ///
    /// Counters are derived data; a restored snapshot may disagree with
    /// its own step set (hand-edited file, older writer). The step set is
    /// authoritative.
    pub fn normalize(&mut self) {
        let mut counters: BTreeMap<ModuleId, usize> = ModuleId::all().map(|m| (m, 0)).collect();
        for step in &self.completed_steps {
            *counters.entry(step.module()).or_insert(0) += 1;
        }
        self.module_progress = counters;
    }
}
