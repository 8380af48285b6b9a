//! The fixed tutorial curriculum: five modules, each with a per-step
//! reward and a badge earned by completing every step.

use crate::badge::Badge;
use crate::ids::{ModuleId, MODULE_COUNT};

/// Static description of one curriculum module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSpec {
    id: u8,
    /// Module title shown in progress views.
    pub title: &'static str,
    /// Points awarded for each completed step in this module.
    pub points_per_step: u64,
    /// Steps that must be completed to unlock the module's badge.
    pub steps_required: usize,
    /// Badge awarded on module completion.
    pub badge: Badge,
}

impl ModuleSpec {
    /// The module this spec describes.
    pub fn id(&self) -> ModuleId {
        // The table below only holds ids in 1..=MODULE_COUNT.
        ModuleId::new(self.id).expect("curriculum table holds valid module ids")
    }
}

const CURRICULUM: [ModuleSpec; MODULE_COUNT] = [
    ModuleSpec {
        id: 1,
        title: "Connecting to Data",
        points_per_step: 25,
        steps_required: 4,
        badge: Badge::Connector,
    },
    ModuleSpec {
        id: 2,
        title: "Building Visualizations",
        points_per_step: 50,
        steps_required: 5,
        badge: Badge::Charts,
    },
    ModuleSpec {
        id: 3,
        title: "Report Design",
        points_per_step: 25,
        steps_required: 4,
        badge: Badge::Design,
    },
    ModuleSpec {
        id: 4,
        title: "Filters & Slicers",
        points_per_step: 75,
        steps_required: 3,
        badge: Badge::Filters,
    },
    ModuleSpec {
        id: 5,
        title: "Publishing & Sharing",
        points_per_step: 50,
        steps_required: 2,
        badge: Badge::Hero,
    },
];

/// The whole curriculum in module order.
pub fn curriculum() -> &'static [ModuleSpec; MODULE_COUNT] {
    &CURRICULUM
}

/// Look up the spec for a module.
pub fn module_spec(module: ModuleId) -> &'static ModuleSpec {
    &CURRICULUM[(module.value() - 1) as usize]
}

/// Total number of steps across all modules.
pub fn total_steps() -> usize {
    CURRICULUM.iter().map(|m| m.steps_required).sum()
}
