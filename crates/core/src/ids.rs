//! Identifiers for curriculum modules and tutorial steps.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of modules in the curriculum.
pub const MODULE_COUNT: usize = 5;

/// Identifier of a curriculum module (1 through 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModuleId(u8);

impl ModuleId {
    /// Create a module id, rejecting values outside the curriculum.
    pub fn new(id: u8) -> Result<Self, Error> {
        if (1..=MODULE_COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(Error::InvalidModule(id))
        }
    }

    /// Underlying numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// All module ids in curriculum order.
    pub fn all() -> impl Iterator<Item = ModuleId> {
        (1..=MODULE_COUNT as u8).map(ModuleId)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Validation has to run on deserialization too, so a hand-edited snapshot
// cannot smuggle in an out-of-range module.
impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        ModuleId::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Identifier of a single tutorial step: module plus step number.
///
/// The canonical textual form is `"<module>-<step>"`, which is also the
/// persisted representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId {
    module: ModuleId,
    step: u8,
}

impl StepId {
    /// Create a step id. Step numbers start at 1.
    pub fn new(module: ModuleId, step: u8) -> Result<Self, Error> {
        if step == 0 {
            return Err(Error::InvalidStep(step));
        }
        Ok(Self { module, step })
    }

    /// The module this step belongs to.
    pub fn module(&self) -> ModuleId {
        self.module
    }

    /// The step number within its module.
    pub fn step(&self) -> u8 {
        self.step
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.module, self.step)
    }
}

/// Error produced when a step id cannot be parsed from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid step id: {0:?}")]
pub struct ParseStepError(pub String);

impl FromStr for StepId {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseStepError(s.to_string());
        let (module, step) = s.split_once('-').ok_or_else(err)?;
        let module: u8 = module.parse().map_err(|_| err())?;
        let step: u8 = step.parse().map_err(|_| err())?;
        let module = ModuleId::new(module).map_err(|_| err())?;
        StepId::new(module, step).map_err(|_| err())
    }
}

impl Serialize for StepId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StepId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(m: u8, s: u8) -> StepId {
        StepId::new(ModuleId::new(m).unwrap(), s).unwrap()
    }

    #[test]
    fn module_id_accepts_curriculum_range() {
        for m in 1..=5 {
            assert!(ModuleId::new(m).is_ok());
        }
    }

    #[test]
    fn module_id_rejects_out_of_range() {
        assert!(ModuleId::new(0).is_err());
        assert!(ModuleId::new(6).is_err());
    }

    #[test]
    fn step_id_display() {
        assert_eq!(step(2, 3).to_string(), "2-3");
    }

    #[test]
    fn step_id_parse_round_trip() {
        let original = step(4, 1);
        let parsed: StepId = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn step_id_parse_rejects_garbage() {
        assert!("".parse::<StepId>().is_err());
        assert!("1".parse::<StepId>().is_err());
        assert!("one-two".parse::<StepId>().is_err());
        assert!("9-1".parse::<StepId>().is_err());
        assert!("1-0".parse::<StepId>().is_err());
    }

    #[test]
    fn step_id_serde_uses_textual_form() {
        let json = serde_json::to_string(&step(3, 2)).unwrap();
        assert_eq!(json, "\"3-2\"");
        let back: StepId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step(3, 2));
    }

    #[test]
    fn step_id_rejects_zero_step() {
        assert!(StepId::new(ModuleId::new(1).unwrap(), 0).is_err());
    }
}
