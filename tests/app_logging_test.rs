//! Checks the loop's tracing events with a captured fmt subscriber.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::Level;

use tui_snake::app::{run, RunOptions};
use tui_snake::core::GameState;
use tui_snake::term::MemoryDriver;
use tui_snake::types::{Direction, GameConfig, Position};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_logged(game: &mut GameState, driver: &mut MemoryDriver, options: &RunOptions) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || run(driver, game, options).unwrap());

    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn new_game() -> GameState {
    let mut game = GameState::new(GameConfig::default(), SmallRng::seed_from_u64(12345));
    game.place_food(Some(Position::new(0, 0)));
    game
}

#[test]
fn steady_movement_logs_one_outcome_change() {
    let mut game = new_game();
    let mut driver = MemoryDriver::new();
    let options = RunOptions::new(Duration::ZERO).with_max_frames(4);

    let log = run_logged(&mut game, &mut driver, &options);

    assert_eq!(log.matches("tick outcome changed").count(), 1);
    assert!(log.contains("outcome=Moved"));
}

#[test]
fn every_outcome_change_is_logged() {
    let mut game = new_game();
    game.place_snake([Position::new(29, 10), Position::new(28, 10)], Direction::Right);
    game.place_food(Some(Position::new(0, 0)));
    let mut driver = MemoryDriver::with_input(["", "", "r", "q"]);

    let log = run_logged(&mut game, &mut driver, &RunOptions::new(Duration::ZERO));

    let changes: Vec<&str> = log
        .lines()
        .filter(|line| line.contains("tick outcome changed"))
        .collect();
    assert_eq!(changes.len(), 3, "{log}");
    assert!(changes[0].contains("outcome=HitWall"));
    assert!(changes[1].contains("outcome=Frozen"));
    assert!(!changes[2].contains("outcome=HitWall") && !changes[2].contains("outcome=Frozen"));
    assert!(log.contains("game restarted"));
    assert!(log.contains("quit requested"));
}
