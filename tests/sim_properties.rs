//! Property tests for the simulation invariants

use proptest::prelude::*;

use birdhop::consts::*;
use birdhop::highscore::HighScoreFile;
use birdhop::roster::Roster;
use birdhop::sim::actor::{Actor, FlyOutcome};
use birdhop::sim::obstacle::{Obstacle, ObstacleField};
use birdhop::sim::rect::Rect;
use birdhop::sim::{GameEvent, Phase, Session, SessionConfig};

use glam::Vec2;

fn stock_actor() -> Actor {
    let spec = Roster::builtin().specs[0].clone();
    Actor::new(spec, Vec2::new(ACTOR_X, SCREEN_HEIGHT / 2.0))
}

proptest! {
    /// Gravity only ever adds downward velocity while grounded, for any
    /// sequence of non-negative timesteps.
    #[test]
    fn gravity_accumulates_monotonically(dts in prop::collection::vec(0.0f32..0.1, 1..200)) {
        let mut actor = stock_actor();
        let mut last = actor.velocity;
        for dt in dts {
            actor.step(dt);
            prop_assert!(actor.velocity >= last);
            last = actor.velocity;
        }
    }

    /// A jump leaves the actor moving up (or exactly still), no matter
    /// what it was doing before.
    #[test]
    fn jump_always_cancels_descent(velocity in -60.0f32..60.0) {
        let mut actor = stock_actor();
        actor.velocity = velocity;
        actor.jump();
        prop_assert!(actor.velocity <= 0.0);
    }

    /// A second fly inside the cooldown window changes nothing.
    #[test]
    fn fly_is_rate_limited(grounded_gap in 0.0f32..0.09) {
        let mut actor = stock_actor();
        actor.step(0.2);
        prop_assert_eq!(actor.fly(), FlyOutcome::Started);

        // Run out the flight in one oversized step, then accumulate
        // less grounded time than the cooldown needs
        actor.step(FLY_DURATION + 0.01);
        actor.step(grounded_gap);

        let velocity = actor.velocity;
        let flying = actor.is_flying();
        prop_assert_eq!(actor.fly(), FlyOutcome::RateLimited);
        prop_assert_eq!(actor.velocity, velocity);
        prop_assert_eq!(actor.is_flying(), flying);
    }

    /// However many times the field is rechecked, a passed obstacle
    /// scores exactly once.
    #[test]
    fn passed_obstacle_scores_exactly_once(checks in 1usize..20) {
        let cfg = SessionConfig::default();
        let mut field = ObstacleField::new(1);
        field.obstacles.push(Obstacle::new(
            0.0,
            cfg.screen_height / 2.0,
            cfg.gap_height,
            cfg.obstacle_width,
        ));

        let actor_rect = Rect::new(200.0, cfg.screen_height / 2.0, 50.0, 50.0);
        let mut total = 0;
        for _ in 0..checks {
            total += field.check_and_score(&actor_rect, 200.0, &cfg).scored;
        }
        prop_assert_eq!(total, 1);
    }

    /// After any step, no retained obstacle has its trailing edge past
    /// the left boundary.
    #[test]
    fn field_never_retains_offscreen_obstacles(
        xs in prop::collection::vec(-500.0f32..1000.0, 0..12),
        dt in 0.0f32..2.0,
    ) {
        let cfg = SessionConfig::default();
        let mut field = ObstacleField::new(9);
        for x in xs {
            field.obstacles.push(Obstacle::new(
                x,
                cfg.screen_height / 2.0,
                cfg.gap_height,
                cfg.obstacle_width,
            ));
        }

        field.step(dt, &cfg);
        for obstacle in &field.obstacles {
            prop_assert!(obstacle.x + obstacle.width >= 0.0);
        }
    }
}

/// High score survives a simulated restart: score 7 beats a persisted 5,
/// the collaborator write happens at game over, and a fresh load sees 7.
#[test]
fn high_score_persists_across_restart() {
    let path = std::env::temp_dir().join(format!(
        "birdhop_test_{}_persist_restart",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let store = HighScoreFile::new(&path);
    store.save(5);

    let mut session = Session::new(SessionConfig::default(), Roster::builtin(), 77, store.load());
    assert_eq!(session.high_score, 5);

    session.start();
    session.score = 7;
    // Cross the ground line so the next tick ends the run
    session.actor.pos.y = session.cfg.ground_line();
    birdhop::sim::tick(&mut session, SIM_DT);
    assert_eq!(session.phase, Phase::GameOver);

    for event in session.drain_events() {
        if let GameEvent::NewHighScore(score) = event {
            store.save(score);
        }
    }

    // Simulated restart: a new session loads the improved score
    let restarted = Session::new(SessionConfig::default(), Roster::builtin(), 78, store.load());
    assert_eq!(restarted.high_score, 7);

    let _ = std::fs::remove_file(&path);
}
