//! Actor variant roster
//!
//! Variants differ only in data (mass, speed, item flags, call), so
//! they live in a table rather than a type hierarchy. A JSON file can
//! override the built-ins; any read or parse failure falls back to the
//! built-in table with a warning, never an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Attributes of one actor variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSpec {
    pub name: String,
    /// What the actor shouts on a jump
    pub call: String,
    /// Scales the gravity term (relative to the reference mass)
    pub mass: f32,
    /// Gates run/fly and scales the jump impulse; 0 = cannot run or fly
    pub speed: f32,
    #[serde(default)]
    pub has_item: bool,
    /// Whether the carried item actually doubles run speed
    #[serde(default = "default_item_effect")]
    pub item_effect: bool,
}

fn default_item_effect() -> bool {
    true
}

/// The selectable actor table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub specs: Vec<ActorSpec>,
}

impl Roster {
    /// The five stock variants
    pub fn builtin() -> Self {
        let spec = |name: &str, call: &str, mass: f32, speed: f32, has_item: bool, item_effect: bool| {
            ActorSpec {
                name: name.to_string(),
                call: call.to_string(),
                mass,
                speed,
                has_item,
                item_effect,
            }
        };
        Self {
            specs: vec![
                spec("Parrot", "hello there", 5.0, 3.0, true, true),
                spec("Sparrow", "tweet tweet", 5.0, 2.0, true, true),
                spec("Pigeon", "flap flap", 5.0, 4.0, true, true),
                spec("Chicken", "cluck", 5.0, 1.0, false, false),
                spec("RubberDuck", "squeak", 5.0, 0.0, false, false),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Load a roster file, falling back to the built-ins on any failure
    /// (missing file, bad JSON, empty table).
    pub fn load_or_builtin(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Roster>(&json) {
                Ok(roster) if !roster.is_empty() => {
                    log::info!("loaded {} actor variants from {}", roster.len(), path.display());
                    roster
                }
                Ok(_) => {
                    log::warn!("roster file {} is empty, using built-ins", path.display());
                    Self::builtin()
                }
                Err(e) => {
                    log::warn!("bad roster file {}: {}, using built-ins", path.display(), e);
                    Self::builtin()
                }
            },
            Err(_) => {
                log::info!("no roster file at {}, using built-ins", path.display());
                Self::builtin()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_shape() {
        let roster = Roster::builtin();
        assert_eq!(roster.len(), 5);
        // Exactly one flightless variant
        let flightless: Vec<_> = roster.specs.iter().filter(|s| s.speed == 0.0).collect();
        assert_eq!(flightless.len(), 1);
        assert_eq!(flightless[0].name, "RubberDuck");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let roster = Roster::load_or_builtin(Path::new("/nonexistent/roster.json"));
        assert_eq!(roster.len(), Roster::builtin().len());
    }

    #[test]
    fn test_roster_round_trips_through_json() {
        let roster = Roster::builtin();
        let json = serde_json::to_string(&roster).expect("serialize");
        let back: Roster = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.specs, roster.specs);
    }

    #[test]
    fn test_item_effect_defaults_on() {
        let json = r#"{"specs":[{"name":"Crow","call":"caw","mass":5.0,"speed":2.0}]}"#;
        let roster: Roster = serde_json::from_str(json).expect("deserialize");
        assert!(!roster.specs[0].has_item);
        assert!(roster.specs[0].item_effect);
    }
}
