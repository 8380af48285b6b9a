//! Achievement badges, one per curriculum module.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::ModuleId;

/// An achievement badge awarded for completing all steps in a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    /// Module 1: data connections.
    Connector,
    /// Module 2: visualizations.
    Charts,
    /// Module 3: report design.
    Design,
    /// Module 4: filters and slicers.
    Filters,
    /// Module 5: publishing and sharing.
    Hero,
}

impl Badge {
    /// Badge key as stored in the snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Connector => "connector",
            Badge::Charts => "charts",
            Badge::Design => "design",
            Badge::Filters => "filters",
            Badge::Hero => "hero",
        }
    }

    /// Human-readable badge title.
    pub fn title(&self) -> &'static str {
        match self {
            Badge::Connector => "Data Connector",
            Badge::Charts => "Chart Master",
            Badge::Design => "Design Guru",
            Badge::Filters => "Filter Expert",
            Badge::Hero => "Dashboard Hero",
        }
    }

    /// The badge awarded for finishing the given module.
    pub fn for_module(module: ModuleId) -> Badge {
        match module.value() {
            1 => Badge::Connector,
            2 => Badge::Charts,
            3 => Badge::Design,
            4 => Badge::Filters,
            _ => Badge::Hero,
        }
    }

    /// All badges in curriculum order.
    pub fn all() -> [Badge; 5] {
        [
            Badge::Connector,
            Badge::Charts,
            Badge::Design,
            Badge::Filters,
            Badge::Hero,
        ]
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unlock flags for the full badge roster, all locked by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badges {
    /// Data Connector unlocked.
    pub connector: bool,
    /// Chart Master unlocked.
    pub charts: bool,
    /// Design Guru unlocked.
    pub design: bool,
    /// Filter Expert unlocked.
    pub filters: bool,
    /// Dashboard Hero unlocked.
    pub hero: bool,
}

impl Badges {
    /// Whether the given badge is unlocked.
    pub fn is_unlocked(&self, badge: Badge) -> bool {
        match badge {
            Badge::Connector => self.connector,
            Badge::Charts => self.charts,
            Badge::Design => self.design,
            Badge::Filters => self.filters,
            Badge::Hero => self.hero,
        }
    }

    /// Unlock a badge. Unlocks are irreversible until a reset.
    pub fn unlock(&mut self, badge: Badge) {
        match badge {
            Badge::Connector => self.connector = true,
            Badge::Charts => self.charts = true,
            Badge::Design => self.design = true,
            Badge::Filters => self.filters = true,
            Badge::Hero => self.hero = true,
        }
    }

    /// Number of unlocked badges.
    pub fn unlocked_count(&self) -> usize {
        Badge::all()
            .iter()
            .filter(|b| self.is_unlocked(**b))
            .count()
    }

    /// True iff every badge is unlocked.
    pub fn all_unlocked(&self) -> bool {
        self.unlocked_count() == Badge::all().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_start_locked() {
        let badges = Badges::default();
        assert_eq!(badges.unlocked_count(), 0);
        assert!(!badges.all_unlocked());
    }

    #[test]
    fn unlock_is_per_badge() {
        let mut badges = Badges::default();
        badges.unlock(Badge::Filters);
        assert!(badges.is_unlocked(Badge::Filters));
        assert!(!badges.is_unlocked(Badge::Connector));
        assert_eq!(badges.unlocked_count(), 1);
    }

    #[test]
    fn all_unlocked_requires_full_roster() {
        let mut badges = Badges::default();
        for badge in Badge::all() {
            assert!(!badges.all_unlocked());
            badges.unlock(badge);
        }
        assert!(badges.all_unlocked());
    }

    #[test]
    fn badge_module_assignment() {
        let modules: Vec<Badge> = ModuleId::all().map(Badge::for_module).collect();
        assert_eq!(modules, Badge::all());
    }

    #[test]
    fn badges_serialize_as_key_map() {
        let mut badges = Badges::default();
        badges.unlock(Badge::Charts);
        let json = serde_json::to_value(&badges).unwrap();
        assert_eq!(json["charts"], true);
        assert_eq!(json["hero"], false);
    }
}
