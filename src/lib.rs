//! Birdhop - a side-scrolling hop-and-fly arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `present`: Read-only frame snapshots for a rendering collaborator
//! - `roster`: Data-driven actor variant table
//! - `highscore`: Plain-text best-score persistence

pub mod highscore;
pub mod present;
pub mod roster;
pub mod sim;

pub use present::FrameSnapshot;
pub use roster::{ActorSpec, Roster};
pub use sim::{GameEvent, InputEvent, Phase, Session, SessionConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz).
    ///
    /// The actor's vertical velocity is accumulated in units/tick at this
    /// rate (position integration adds it once per tick, without dt), while
    /// the gravity term scales by dt explicitly. Changing the tick rate
    /// changes jump height and gravity feel, so the loop must stay fixed.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 512.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;
    /// Height of the ground band at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 30.0;

    /// Actor defaults - fixed horizontal lane, square sprite
    pub const ACTOR_X: f32 = 120.0;
    pub const ACTOR_SIZE: f32 = 50.0;
    /// Downward acceleration, scaled by mass / REFERENCE_MASS
    pub const GRAVITY: f32 = 20.0;
    pub const REFERENCE_MASS: f32 = 5.0;
    /// Visual tilt clamp (degrees)
    pub const MAX_ROTATION: f32 = 30.0;
    /// Velocity set when flight begins (y-down coordinates)
    pub const FLY_ASCENT_VELOCITY: f32 = 0.5;
    /// How long flight lasts once started (seconds)
    pub const FLY_DURATION: f32 = 0.5;
    /// Grounded time that must accumulate between flights (seconds)
    pub const FLY_COOLDOWN: f32 = 0.1;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const GAP_HEIGHT: f32 = 180.0;
    pub const SCROLL_SPEED: f32 = 180.0;
    pub const SPAWN_INTERVAL: f32 = 1.5;
    /// Obstacles enter just off the right edge
    pub const SPAWN_X: f32 = SCREEN_WIDTH + 60.0;
    /// Gap centers are drawn uniformly from [GAP_MARGIN, SCREEN_HEIGHT - GAP_MARGIN]
    pub const GAP_MARGIN: f32 = 120.0;
}
