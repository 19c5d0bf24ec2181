//! Session state and orchestration
//!
//! The `Session` owns all mutable game state for one play-through: the
//! actor, the obstacle field, the score, and the menu/playing/game-over
//! phase. Collaborators only ever see it through input events
//! (`sim::tick`), drained telemetry events, and read-only snapshots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::ObstacleField;
use crate::consts::*;
use crate::present::{ActorView, FrameSnapshot, ObstacleView};
use crate::roster::Roster;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Actor selection screen; the simulation is frozen
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; the simulation is frozen
    GameOver,
}

/// Notifications for presentation/telemetry collaborators.
///
/// Invalid action attempts (`CannotRun`, `CannotFly`) are informational
/// no-ops, not errors. A rate-limited fly emits nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The actor called out on a jump
    Vocalized { name: String, call: String },
    /// Flight actually began
    FlightStarted { name: String },
    /// Cosmetic run stat (no physics effect)
    Ran { effective_speed: f32, item_boost: bool },
    CannotRun,
    CannotFly,
    /// Score changed; carries the new total
    Scored { total: u32 },
    /// The run ended with this score
    Ended { score: u32 },
    /// The best score improved; the persistence collaborator should write it
    NewHighScore(u32),
}

/// Fixed playfield tuning, passed in explicitly at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,
    pub actor_x: f32,
    pub spawn_interval: f32,
    pub scroll_speed: f32,
    pub gap_height: f32,
    pub gap_margin: f32,
    pub spawn_x: f32,
    pub obstacle_width: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            actor_x: ACTOR_X,
            spawn_interval: SPAWN_INTERVAL,
            scroll_speed: SCROLL_SPEED,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            spawn_x: SPAWN_X,
            obstacle_width: OBSTACLE_WIDTH,
        }
    }
}

impl SessionConfig {
    /// The y coordinate where the ground band begins
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Actor spawn point: fixed lane x, vertical center
    #[inline]
    pub fn actor_start(&self) -> Vec2 {
        Vec2::new(self.actor_x, self.screen_height / 2.0)
    }
}

/// Complete mutable game state for one play-through
#[derive(Debug, Clone)]
pub struct Session {
    pub cfg: SessionConfig,
    pub roster: Roster,
    /// Menu selection, always < roster length
    pub selected: usize,
    pub phase: Phase,
    pub actor: Actor,
    pub field: ObstacleField,
    pub score: u32,
    /// Best score seen this process; monotonically non-decreasing
    pub high_score: u32,
    /// Base seed; each run derives its own RNG stream from it
    seed: u64,
    runs: u64,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session in the menu phase. `high_score` comes from the
    /// persistence collaborator.
    pub fn new(cfg: SessionConfig, roster: Roster, seed: u64, high_score: u32) -> Self {
        debug_assert!(!roster.is_empty());
        let actor = Actor::new(roster.specs[0].clone(), cfg.actor_start());
        let field = ObstacleField::new(seed);
        Self {
            cfg,
            roster,
            selected: 0,
            phase: Phase::Menu,
            actor,
            field,
            score: 0,
            high_score,
            seed,
            runs: 0,
            events: Vec::new(),
        }
    }

    /// Reset the play field and actor for a fresh run. Each reset gets
    /// its own RNG stream so retries differ while the whole session is
    /// reproducible from the base seed.
    pub fn reset(&mut self) {
        self.runs += 1;
        self.actor = Actor::new(
            self.roster.specs[self.selected].clone(),
            self.cfg.actor_start(),
        );
        self.field = ObstacleField::new(self.seed.wrapping_add(self.runs));
        self.score = 0;
    }

    /// Cycle the menu selection backward and reset the preview
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.roster.len() - 1) % self.roster.len();
        self.reset();
    }

    /// Cycle the menu selection forward and reset the preview
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.roster.len();
        self.reset();
    }

    /// Begin a run (from the menu or a game-over retry)
    pub fn start(&mut self) {
        self.reset();
        self.phase = Phase::Playing;
        log::info!(
            "run started as {} (seed {}, run {})",
            self.actor.spec.name,
            self.seed,
            self.runs
        );
    }

    /// Back to the menu, dropping the finished run
    pub fn to_menu(&mut self) {
        self.reset();
        self.phase = Phase::Menu;
    }

    /// End the run. Updates and reports the high score when beaten.
    pub(crate) fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.events.push(GameEvent::Ended { score: self.score });
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::NewHighScore(self.high_score));
            log::info!("new high score: {}", self.high_score);
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view of the current frame for the presentation
    /// collaborator. Plain data, no pixel-layout assumptions.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            selected: self.selected,
            roster: self.roster.specs.iter().map(|s| s.name.clone()).collect(),
            actor: ActorView {
                x: self.actor.pos.x,
                y: self.actor.pos.y,
                rotation: self.actor.rotation,
                sprite: self.selected,
                name: self.actor.spec.name.clone(),
            },
            obstacles: self
                .field
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    width: o.width,
                    gap_center: o.gap_center,
                    gap_height: o.gap_height,
                })
                .collect(),
            ground_line: self.cfg.ground_line(),
            screen_width: self.cfg.screen_width,
            screen_height: self.cfg.screen_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(SessionConfig::default(), Roster::builtin(), 1234, 0)
    }

    #[test]
    fn test_starts_in_menu() {
        let s = session();
        assert_eq!(s.phase, Phase::Menu);
        assert_eq!(s.score, 0);
        assert!(s.field.obstacles.is_empty());
    }

    #[test]
    fn test_selection_wraps_modulo_roster() {
        let mut s = session();
        let n = s.roster.len();

        s.select_prev();
        assert_eq!(s.selected, n - 1);
        s.select_next();
        assert_eq!(s.selected, 0);

        for _ in 0..n {
            s.select_next();
        }
        assert_eq!(s.selected, 0);
    }

    #[test]
    fn test_selection_swaps_actor_variant() {
        let mut s = session();
        let first = s.actor.spec.name.clone();
        s.select_next();
        assert_ne!(s.actor.spec.name, first);
        assert_eq!(s.actor.spec.name, s.roster.specs[1].name);
    }

    #[test]
    fn test_reset_clears_run_state() {
        let mut s = session();
        s.start();
        s.score = 9;
        s.actor.pos.y = 100.0;
        s.reset();
        assert_eq!(s.score, 0);
        assert!(s.field.obstacles.is_empty());
        assert_eq!(s.actor.pos, s.cfg.actor_start());
    }

    #[test]
    fn test_game_over_raises_high_score_once() {
        let mut s = session();
        s.start();
        s.score = 7;
        s.high_score = 5;
        s.game_over();

        assert_eq!(s.phase, Phase::GameOver);
        assert_eq!(s.high_score, 7);
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::Ended { score: 7 }));
        assert!(events.contains(&GameEvent::NewHighScore(7)));
    }

    #[test]
    fn test_game_over_keeps_better_high_score() {
        let mut s = session();
        s.start();
        s.score = 3;
        s.high_score = 5;
        s.game_over();

        assert_eq!(s.high_score, 5);
        let events = s.drain_events();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewHighScore(_))));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut s = session();
        s.start();
        s.score = 4;
        let snap = s.snapshot();
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.score, 4);
        assert_eq!(snap.actor.x, s.cfg.actor_x);
        assert_eq!(snap.roster.len(), s.roster.len());
        assert_eq!(snap.ground_line, 738.0);
    }
}
