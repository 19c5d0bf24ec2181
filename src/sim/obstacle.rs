//! Scrolling obstacles and the field that manages them
//!
//! An obstacle is a pair of barriers with a passable gap; only its x
//! position changes after spawn. The field spawns obstacles on a fixed
//! timer with seeded-random gap placement, scrolls them left, culls them
//! once fully off-screen, and detects pass-through for scoring.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::SessionConfig;

/// A barrier pair with a vertical gap
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge x position (decreases over time)
    pub x: f32,
    /// Vertical center of the gap, fixed at spawn
    pub gap_center: f32,
    /// Gap opening height, fixed at spawn
    pub gap_height: f32,
    pub width: f32,
    /// One-shot flag, set when the actor passes the trailing edge
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_center: f32, gap_height: f32, width: f32) -> Self {
        Self {
            x,
            gap_center,
            gap_height,
            width,
            scored: false,
        }
    }

    /// Scroll left
    pub fn step(&mut self, dt: f32, scroll_speed: f32) {
        self.x -= scroll_speed * dt;
    }

    /// True once the trailing edge has passed the left boundary
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// The two barrier rectangles: top runs from the screen top down to
    /// the gap, bottom from the gap down to the ground line. Heights are
    /// clamped to zero when the gap reaches past either bound.
    pub fn barriers(&self, ground_line: f32) -> (Rect, Rect) {
        let top_h = (self.gap_center - self.gap_height / 2.0).max(0.0);
        let bottom_y = self.gap_center + self.gap_height / 2.0;
        let bottom_h = (ground_line - bottom_y).max(0.0);

        let top = Rect::new(self.x, 0.0, self.width, top_h);
        let bottom = Rect::new(self.x, bottom_y, self.width, bottom_h);
        (top, bottom)
    }

    /// Does `rect` hit either barrier?
    pub fn collides_with(&self, rect: &Rect, ground_line: f32) -> bool {
        let (top, bottom) = self.barriers(ground_line);
        rect.intersects(&top) || rect.intersects(&bottom)
    }
}

/// What the field observed during collision/scoring this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOutcome {
    /// The actor hit a barrier; the session should end
    pub collided: bool,
    /// Obstacles newly passed this tick
    pub scored: u32,
}

/// The live collection of obstacles
#[derive(Debug, Clone)]
pub struct ObstacleField {
    /// Spawn order, which is left-to-right order on screen
    pub obstacles: Vec<Obstacle>,
    /// Seconds accumulated since the last spawn
    spawn_timer: f32,
    rng: Pcg32,
}

impl ObstacleField {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn on the timer, advance every obstacle, cull off-screen ones.
    /// Survivor order is preserved.
    pub fn step(&mut self, dt: f32, cfg: &SessionConfig) {
        self.spawn_timer += dt;
        if self.spawn_timer >= cfg.spawn_interval {
            self.spawn_timer = 0.0;
            let gap_center = self
                .rng
                .random_range(cfg.gap_margin..=cfg.screen_height - cfg.gap_margin);
            self.obstacles.push(Obstacle::new(
                cfg.spawn_x,
                gap_center,
                cfg.gap_height,
                cfg.obstacle_width,
            ));
        }

        for obstacle in &mut self.obstacles {
            obstacle.step(dt, cfg.scroll_speed);
        }

        self.obstacles.retain(|o| !o.is_offscreen());
    }

    /// Check the actor against every live obstacle.
    ///
    /// A collision stops the scan (the session is over either way). An
    /// unscored obstacle whose trailing edge has passed the actor's lane
    /// position is marked scored exactly once.
    pub fn check_and_score(&mut self, actor_rect: &Rect, actor_x: f32, cfg: &SessionConfig) -> FieldOutcome {
        let mut outcome = FieldOutcome::default();
        let ground_line = cfg.ground_line();

        for obstacle in &mut self.obstacles {
            if obstacle.collides_with(actor_rect, ground_line) {
                outcome.collided = true;
                return outcome;
            }
            if !obstacle.scored && obstacle.x + obstacle.width < actor_x {
                obstacle.scored = true;
                outcome.scored += 1;
            }
        }

        outcome
    }
}
