//! The player-controlled actor
//!
//! Vertical-only physics in screen coordinates (y grows down): gravity
//! accumulates velocity while grounded, a jump applies an upward impulse,
//! and flight suspends gravity for a short, cooldown-limited window.
//!
//! Velocity is stored in units/tick at the fixed 60 Hz rate: the gravity
//! term scales by dt but position integration adds the velocity once per
//! tick. See `consts::SIM_DT`.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;
use crate::roster::ActorSpec;

/// Result of a fly attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyOutcome {
    /// Flight began; velocity and timers were reset
    Started,
    /// Cooldown has not elapsed; nothing changed (rate limit, not an error)
    RateLimited,
    /// This actor has zero speed and can never fly
    Unable,
}

/// Effective run speed, reported for presentation/telemetry only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStat {
    pub effective_speed: f32,
    /// True when the carried item doubled the speed
    pub item_boost: bool,
}

/// The player-controlled entity
#[derive(Debug, Clone)]
pub struct Actor {
    /// Variant attributes (mass, speed, item flags, call)
    pub spec: ActorSpec,
    /// Top-left corner; x stays at the fixed lane position
    pub pos: Vec2,
    /// Vertical velocity (units/tick, positive = down)
    pub velocity: f32,
    /// Visual tilt in degrees, derived from velocity each step
    pub rotation: f32,
    /// Square bounding box edge length
    pub size: f32,
    flying: bool,
    /// Remaining flight time (seconds, never negative)
    flight_timer: f32,
    /// Grounded time accumulated since the last flight (seconds)
    cooldown: f32,
}

impl Actor {
    pub fn new(spec: ActorSpec, start: Vec2) -> Self {
        Self {
            spec,
            pos: start,
            velocity: 0.0,
            rotation: 0.0,
            size: ACTOR_SIZE,
            flying: false,
            flight_timer: 0.0,
            cooldown: 0.0,
        }
    }

    pub fn is_flying(&self) -> bool {
        self.flying
    }

    /// Bounding rectangle for collision checks
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Advance physics by one tick.
    ///
    /// While flying the flight timer runs down and gravity is suspended;
    /// otherwise gravity accumulates (scaled by mass) and the fly cooldown
    /// charges. Rotation and position are updated unconditionally.
    pub fn step(&mut self, dt: f32) {
        if self.flying {
            self.flight_timer = (self.flight_timer - dt).max(0.0);
            if self.flight_timer <= 0.0 {
                self.flying = false;
            }
        } else {
            self.velocity += GRAVITY * dt * self.spec.mass / REFERENCE_MASS;
            self.cooldown += dt;
        }

        self.rotation = (self.velocity * -2.0).clamp(-MAX_ROTATION, MAX_ROTATION);
        self.pos.y += self.velocity;
    }

    /// Upward impulse, scaled by the actor's speed stat.
    ///
    /// Downward momentum is cancelled first so a jump always results in
    /// upward (or zero) velocity. Jumping also ends any active flight.
    pub fn jump(&mut self) {
        if self.velocity > 0.0 {
            self.velocity = 0.0;
        }
        self.velocity -= 5.0 * (1.0 + self.spec.speed / 8.0);
        self.flying = false;
    }

    /// Compute the cosmetic run stat. Returns `None` for actors that
    /// cannot run (zero speed).
    pub fn run(&self) -> Option<RunStat> {
        if self.spec.speed <= 0.0 {
            return None;
        }
        let item_boost = self.spec.has_item && self.spec.item_effect;
        let multiplier = if item_boost { 2.0 } else { 1.0 };
        Some(RunStat {
            effective_speed: self.spec.mass * self.spec.speed * multiplier,
            item_boost,
        })
    }

    /// Attempt to start flying.
    ///
    /// Requires a nonzero speed stat and an elapsed cooldown. On success
    /// the velocity snaps to a small fixed drift, the flight timer is
    /// armed, and the cooldown accumulator resets.
    pub fn fly(&mut self) -> FlyOutcome {
        if self.spec.speed <= 0.0 {
            return FlyOutcome::Unable;
        }
        if self.cooldown <= FLY_COOLDOWN {
            return FlyOutcome::RateLimited;
        }
        self.velocity = FLY_ASCENT_VELOCITY;
        self.flight_timer = FLY_DURATION;
        self.cooldown = 0.0;
        self.flying = true;
        FlyOutcome::Started
    }
}
