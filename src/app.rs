//! The fixed-tick game loop.
//!
//! One thread does everything in strict order each iteration: drain pending
//! keys, advance the game, repaint, sleep. The sleep is a constant interval,
//! so slow frames or bursts of input stretch the game instead of being
//! compensated for. Quit is checked while draining input and takes effect
//! before the next tick or repaint.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info};

use crate::core::{GameState, IntentOutcome, TickOutcome};
use crate::input::map_key;
use crate::term::{FrameBuffer, GameView, TerminalDriver};
use crate::types::Intent;

/// Loop parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Sleep between iterations.
    pub tick: Duration,
    /// Stop after this many presented frames (including the first one).
    /// `None` runs until Quit.
    pub max_frames: Option<u64>,
}

impl RunOptions {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            max_frames: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }
}

/// What happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// Ticks that changed the game (frozen ticks are not counted).
    pub ticks: u64,
    pub restarts: u32,
    pub final_score: u32,
    /// False when the run ended on the frame limit instead.
    pub quit: bool,
}

/// Run the game loop until Quit (or the frame limit).
///
/// The driver is expected to be in raw mode already; entering and restoring
/// it is the caller's job so the farewell line can be written in between.
pub fn run<D, R>(driver: &mut D, game: &mut GameState<R>, options: &RunOptions) -> Result<RunSummary>
where
    D: TerminalDriver + ?Sized,
    R: Rng,
{
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut summary = RunSummary::default();
    let mut last_outcome = None;

    info!(
        width = game.config().width(),
        height = game.config().height(),
        tick_ms = options.tick.as_millis() as u64,
        "game started"
    );

    driver.clear_screen()?;
    view.render_into(&game.snapshot(), &mut fb);
    driver.present(&fb)?;
    summary.frames += 1;

    loop {
        if options.max_frames.is_some_and(|max| summary.frames >= max) {
            summary.final_score = game.score();
            return Ok(summary);
        }

        while driver.key_available() {
            let Some(key) = driver.read_key() else {
                continue;
            };
            match map_key(key) {
                Intent::Quit => {
                    info!(score = game.score(), "quit requested");
                    summary.final_score = game.score();
                    summary.quit = true;
                    return Ok(summary);
                }
                intent => {
                    if game.apply_intent(intent) == IntentOutcome::Restarted {
                        info!("game restarted");
                        summary.restarts += 1;
                        driver.clear_screen()?;
                    }
                }
            }
        }

        let outcome = game.tick();
        if last_outcome != Some(outcome) {
            debug!(?outcome, score = game.score(), "tick outcome changed");
            last_outcome = Some(outcome);
        }
        match outcome {
            TickOutcome::Frozen => {}
            TickOutcome::Moved => summary.ticks += 1,
            TickOutcome::Ate => {
                summary.ticks += 1;
                debug!(score = game.score(), food = ?game.food(), "food eaten");
            }
            TickOutcome::HitWall | TickOutcome::HitSelf | TickOutcome::BoardFull => {
                summary.ticks += 1;
                info!(?outcome, score = game.score(), "game over");
            }
        }

        view.render_into(&game.snapshot(), &mut fb);
        driver.present(&fb)?;
        summary.frames += 1;

        thread::sleep(options.tick);
    }
}
