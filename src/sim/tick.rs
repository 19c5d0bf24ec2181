//! Input dispatch and the fixed-timestep update
//!
//! Discrete input events drive the state machine; `tick` advances the
//! simulation by one fixed step. Menu and GameOver freeze the
//! simulation entirely.

use super::actor::FlyOutcome;
use super::state::{GameEvent, Phase, Session};

/// Abstract input events delivered by the input collaborator.
/// Mapping of physical keys/buttons to these is outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Terminate the outer loop; the session itself ignores this
    Quit,
    DirectionPrev,
    DirectionNext,
    Confirm,
    Cancel,
    /// Jump while playing; also starts a run from the menu
    PrimaryAction,
    /// Fly while playing
    SecondaryAction,
    /// Run while playing (cosmetic)
    TertiaryAction,
}

/// Route one input event through the state machine
pub fn dispatch(session: &mut Session, event: InputEvent) {
    match session.phase {
        Phase::Menu => match event {
            InputEvent::DirectionPrev => session.select_prev(),
            InputEvent::DirectionNext => session.select_next(),
            InputEvent::Confirm | InputEvent::PrimaryAction => session.start(),
            _ => {}
        },
        Phase::Playing => match event {
            InputEvent::PrimaryAction => {
                session.actor.jump();
                session.push_event(GameEvent::Vocalized {
                    name: session.actor.spec.name.clone(),
                    call: session.actor.spec.call.clone(),
                });
            }
            InputEvent::SecondaryAction => match session.actor.fly() {
                FlyOutcome::Started => {
                    session.push_event(GameEvent::FlightStarted {
                        name: session.actor.spec.name.clone(),
                    });
                }
                // Rate limiter, not a failure: no event, no state change
                FlyOutcome::RateLimited => {}
                FlyOutcome::Unable => {
                    log::debug!("{} cannot fly", session.actor.spec.name);
                    session.push_event(GameEvent::CannotFly);
                }
            },
            InputEvent::TertiaryAction => match session.actor.run() {
                Some(stat) => {
                    session.push_event(GameEvent::Ran {
                        effective_speed: stat.effective_speed,
                        item_boost: stat.item_boost,
                    });
                }
                None => {
                    log::debug!("{} cannot run", session.actor.spec.name);
                    session.push_event(GameEvent::CannotRun);
                }
            },
            _ => {}
        },
        Phase::GameOver => match event {
            InputEvent::Confirm => session.start(),
            InputEvent::Cancel => session.to_menu(),
            _ => {}
        },
    }
}

/// Advance the session by one fixed timestep.
///
/// Order: actor physics, top clamp, ground check (ends the run before
/// the field moves), field spawn/scroll/cull, collision + scoring.
pub fn tick(session: &mut Session, dt: f32) {
    if session.phase != Phase::Playing {
        return;
    }

    session.actor.step(dt);

    // Ceiling clamp: stop at the top edge, kill upward momentum
    if session.actor.pos.y < 0.0 {
        session.actor.pos.y = 0.0;
        session.actor.velocity = 0.0;
    }

    // Ground check ends the tick immediately; no field update applies
    let ground_line = session.cfg.ground_line();
    if session.actor.pos.y + session.actor.size > ground_line {
        session.actor.pos.y = ground_line - session.actor.size;
        session.game_over();
        return;
    }

    session.field.step(dt, &session.cfg);

    let actor_rect = session.actor.bounds();
    let outcome = session
        .field
        .check_and_score(&actor_rect, session.actor.pos.x, &session.cfg);

    if outcome.collided {
        session.game_over();
        return;
    }
    if outcome.scored > 0 {
        session.score += outcome.scored;
        session.push_event(GameEvent::Scored {
            total: session.score,
        });
    }
}
