//! End-to-end scenarios on a 320x480 playfield

use brick_crusher::sim::{Body, GamePhase};
use brick_crusher::{GameEvent, Scene, Tuning};
use glam::Vec2;

fn scene() -> Scene<Vec<GameEvent>> {
    Scene::new(Tuning::default(), 320.0, 480.0, Vec::new())
}

#[test]
fn test_reference_scenario() {
    let mut scene = scene();
    assert!((scene.state().tuning.spawn_interval() - 0.6667).abs() < 1e-3);
    assert_eq!(scene.state().brick_width(), 40.0);

    // Ball starts above the paddle and launches straight up
    assert_eq!(scene.state().ball.pos, Vec2::new(160.0, 120.0));
    scene.on_touch_down(160.0, 10.0);
    assert_eq!(scene.state().ball.vel, Vec2::new(0.0, 320.0));

    // Row 1 at t=0
    scene.update(0.0);
    assert_eq!(scene.state().bricks.len(), 8);
    scene.update(0.5);
    assert_eq!(scene.state().bricks.len(), 8);
    // Row 2 at t~0.667
    scene.update(0.6667);
    assert_eq!(scene.state().bricks.len(), 16);

    scene.on_touch_down(300.0, 50.0);
    assert_eq!(scene.state().paddle.pos.x, 260.0);
}

#[test]
fn test_score_counts_destroyed_bricks() {
    let mut scene = scene();
    scene.on_touch_down(0.0, 0.0);
    scene.update(0.0);

    let ids: Vec<_> = scene.state().bricks.iter().map(|b| b.id).take(3).collect();
    for (i, id) in ids.iter().enumerate() {
        scene.on_contact(Body::BALL, Body::brick(*id));
        assert_eq!(scene.score(), 10 * (i as u64 + 1));
    }
    // Paddle bounces never score
    scene.on_contact(Body::PADDLE, Body::BALL);
    assert_eq!(scene.score(), 30);

    let scores: Vec<u64> = scene
        .effects()
        .iter()
        .filter_map(|e| match e {
            GameEvent::ScoreChanged { score } => Some(*score),
            _ => None,
        })
        .collect();
    assert_eq!(scores, vec![10, 20, 30]);

    let tints: Vec<u8> = scene
        .effects()
        .iter()
        .filter_map(|e| match e {
            GameEvent::BrickDestroyed { tint, .. } => Some(*tint),
            _ => None,
        })
        .collect();
    assert_eq!(tints.len(), 3);
}

#[test]
fn test_loss_is_same_step_and_stops_ball() {
    let mut scene = scene();
    scene.on_touch_down(0.0, 0.0);
    scene.update(0.0);

    // Brick bottom starts at 440, paddle top is 70: 370 units at 120/s
    scene.update(3.0);
    assert_eq!(scene.phase(), GamePhase::Playing);
    scene.update(3.09);
    assert_eq!(scene.phase(), GamePhase::GameOver);
    assert_eq!(scene.state().ball.vel, Vec2::ZERO);

    // Frozen until the player taps
    let bricks = scene.state().bricks.clone();
    scene.update(10.0);
    assert_eq!(scene.state().bricks, bricks);
}

#[test]
fn test_round_trip_restores_defaults() {
    let mut scene = scene();
    let paddle = scene.state().paddle.clone();
    let ball = scene.state().ball.clone();

    scene.on_touch_down(0.0, 0.0);
    let mut t = 0.0;
    while scene.phase() == GamePhase::Playing {
        scene.on_touch_move(40.0 + (t as f32 * 90.0) % 240.0, 0.0);
        scene.frame(t);
        t += 1.0 / 60.0;
        assert!(t < 120.0, "game never ended");
    }
    assert_eq!(scene.phase(), GamePhase::GameOver);

    scene.on_touch_down(0.0, 0.0);
    assert_eq!(scene.phase(), GamePhase::Splash);
    assert_eq!(scene.score(), 0);
    assert!(scene.state().bricks.is_empty());
    assert_eq!(scene.state().paddle, paddle);
    assert_eq!(scene.state().ball, ball);

    // And play works again from the fresh splash
    scene.on_touch_down(0.0, 0.0);
    scene.frame(t);
    assert_eq!(scene.phase(), GamePhase::Playing);
    assert_eq!(scene.state().bricks.len(), 8);
}

#[test]
fn test_state_hooks_follow_transitions() {
    let mut scene = scene();
    scene.on_touch_down(0.0, 0.0);
    scene.update(0.0);
    scene.update(5.0);
    scene.on_touch_down(0.0, 0.0);

    let phases: Vec<GamePhase> = scene
        .effects()
        .iter()
        .filter_map(|e| match e {
            GameEvent::StateChanged { phase } => Some(*phase),
            _ => None,
        })
        .collect();
    assert_eq!(phases, vec![GamePhase::Playing, GamePhase::GameOver, GamePhase::Splash]);
}
