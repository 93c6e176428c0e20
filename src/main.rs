//! Brick Crusher entry point
//!
//! Runs the simulation headless at 60 frames/s with an autopilot steering the
//! paddle, and logs how each game went. Set `RUST_LOG=debug` for per-row detail.
//!
//! Usage: `brick-crusher [tuning.json] [--seconds N] [--games N]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use brick_crusher::sim::GamePhase;
use brick_crusher::{Effects, Scene, Tuning};

const FRAME_DT: f64 = 1.0 / 60.0;
const PLAYFIELD_WIDTH: f32 = 320.0;
const PLAYFIELD_HEIGHT: f32 = 480.0;

/// Command line options
struct Options {
    tuning_path: Option<String>,
    max_seconds: f64,
    games: u32,
}

impl Options {
    fn parse() -> Self {
        let mut options = Self {
            tuning_path: None,
            max_seconds: 120.0,
            games: 2,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seconds" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(secs) => options.max_seconds = secs,
                    None => log::warn!("--seconds expects a number, keeping {}", options.max_seconds),
                },
                "--games" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(games) => options.games = games,
                    None => log::warn!("--games expects a count, keeping {}", options.games),
                },
                _ => options.tuning_path = Some(arg),
            }
        }
        options
    }
}

/// Counts what the hooks report
#[derive(Debug, Default)]
struct Tally {
    bricks_destroyed: u32,
    impacts: u32,
    frames: u64,
}

impl Effects for Tally {
    fn ball_trail_tick(&mut self, _pos: glam::Vec2) {
        self.frames += 1;
    }

    fn brick_destroyed(&mut self, _pos: glam::Vec2, _tint: u8) {
        self.bricks_destroyed += 1;
    }

    fn impact(&mut self, _strength: f32) {
        self.impacts += 1;
    }

    fn state_changed(&mut self, phase: GamePhase) {
        if phase == GamePhase::Splash {
            *self = Tally::default();
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Brick Crusher (headless) starting...");

    let options = Options::parse();
    let tuning = match &options.tuning_path {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let mut jitter = Pcg32::seed_from_u64(tuning.rng_seed ^ 0x5eed);

    let mut scene = Scene::new(tuning, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, Tally::default());
    let mut games_played = 0;
    let mut now = 0.0;

    while now < options.max_seconds {
        match scene.phase() {
            GamePhase::Splash => scene.on_touch_down(PLAYFIELD_WIDTH / 2.0, 0.0),
            GamePhase::GameOver => {
                let tally = scene.effects();
                games_played += 1;
                println!(
                    "Game {}: score {} ({} bricks, {} impacts, {:.1}s)",
                    games_played,
                    scene.score(),
                    tally.bricks_destroyed,
                    tally.impacts,
                    tally.frames as f64 * FRAME_DT
                );
                if games_played >= options.games {
                    break;
                }
                scene.on_touch_down(0.0, 0.0);
            }
            GamePhase::Playing => {
                // Follow the ball, slightly off-center so bounces vary
                let target = scene.state().ball.pos.x + jitter.random_range(-25.0f32..25.0);
                scene.on_touch_move(target, 0.0);
            }
        }

        scene.frame(now);
        now += FRAME_DT;
    }

    if scene.phase() == GamePhase::Playing {
        println!("Time limit reached mid-game at score {}", scene.score());
    }
    log::info!("Played {} games in {:.1}s of simulated time", games_played, now);
}
