//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable obstacle order (spawn order, left to right)
//! - No rendering or platform dependencies

pub mod actor;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;

pub use actor::{Actor, FlyOutcome, RunStat};
pub use obstacle::{FieldOutcome, Obstacle, ObstacleField};
pub use rect::Rect;
pub use state::{GameEvent, Phase, Session, SessionConfig};
pub use tick::{InputEvent, dispatch, tick};
