//! Birdhop entry point
//!
//! Headless demo driver: selects an actor, runs one autopiloted session
//! at the fixed timestep, forwards telemetry events to the log, and
//! persists the high score when it improves. A real front end would map
//! its own inputs to `InputEvent`s and draw from `Session::snapshot()`
//! exactly the same way.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use birdhop::consts::SIM_DT;
use birdhop::highscore::HighScoreFile;
use birdhop::roster::Roster;
use birdhop::sim::{GameEvent, InputEvent, Phase, Session, SessionConfig, dispatch, tick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let store = HighScoreFile::new("highscore.txt");
    let roster = Roster::load_or_builtin(Path::new("roster.json"));
    let mut session = Session::new(SessionConfig::default(), roster, seed, store.load());

    log::info!(
        "birdhop starting (seed {}, best so far {})",
        seed,
        session.high_score
    );

    // Pick the Pigeon (fastest stock variant) and start
    dispatch(&mut session, InputEvent::DirectionNext);
    dispatch(&mut session, InputEvent::DirectionNext);
    dispatch(&mut session, InputEvent::Confirm);
    handle_events(&mut session, &store);

    // Autopilot: hop whenever the actor is falling below the next gap
    let max_ticks = 60 * 120; // two simulated minutes, tops
    for _ in 0..max_ticks {
        let target = session
            .field
            .obstacles
            .iter()
            .find(|o| o.x + o.width >= session.actor.pos.x)
            .map(|o| o.gap_center)
            .unwrap_or(session.cfg.screen_height / 2.0);

        let actor_bottom = session.actor.pos.y + session.actor.size;
        if actor_bottom > target && session.actor.velocity >= 0.0 {
            dispatch(&mut session, InputEvent::PrimaryAction);
        }

        tick(&mut session, SIM_DT);
        handle_events(&mut session, &store);

        if session.phase == Phase::GameOver {
            break;
        }
    }

    let snapshot = session.snapshot();
    log::info!(
        "demo finished: score {}, best {}",
        snapshot.score,
        snapshot.high_score
    );
}

/// Drain session events: telemetry goes to the log, high-score updates
/// go to the persistence collaborator.
fn handle_events(session: &mut Session, store: &HighScoreFile) {
    for event in session.drain_events() {
        match event {
            GameEvent::Vocalized { name, call } => log::info!("{name}: {call}"),
            GameEvent::FlightStarted { name } => log::info!("{name} is flying"),
            GameEvent::Ran {
                effective_speed,
                item_boost,
            } => {
                if item_boost {
                    log::info!("running at {effective_speed} (item boost)");
                } else {
                    log::info!("running at {effective_speed}");
                }
            }
            GameEvent::CannotRun => log::debug!("this actor cannot run"),
            GameEvent::CannotFly => log::debug!("this actor cannot fly"),
            GameEvent::Scored { total } => log::info!("score: {total}"),
            GameEvent::Ended { score } => log::info!("run over at {score}"),
            GameEvent::NewHighScore(score) => store.save(score),
        }
    }
}
