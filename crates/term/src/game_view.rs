//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, for a W x H grid:
//!
//! ```text
//! +------...------+    row 0
//! |               |    rows 1..=H, one terminal column per cell
//! +------...------+    row H + 1
//! Score: N   ...       row H + 2
//! ```

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::types::{Position, MAX_GRID_SIDE};

/// Controls hint shown after the score.
pub const CONTROLS_HINT: &str = "   (WASD / Arrow keys)  Quit: Q";
/// Appended to the status row while the game is over.
pub const GAME_OVER_HINT: &str = "   GAME OVER! Press R to restart.";

/// Characters used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub corner: char,
    pub horizontal: char,
    pub vertical: char,
    pub head: char,
    pub body: char,
    pub food: char,
    pub empty: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            corner: '+',
            horizontal: '-',
            vertical: '|',
            head: 'O',
            body: 'o',
            food: '*',
            empty: ' ',
        }
    }
}

/// A full-frame text renderer for the snake game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    glyphs: Glyphs,
}

impl GameView {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// The framebuffer is resized to fit the board and the status row, so
    /// callers can reuse one buffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, fb: &mut FrameBuffer) {
        let status = status_line(snap.score, snap.game_over);

        // Hand-built snapshots are clamped to the same bounds GameConfig enforces.
        let cols = snap.width.clamp(0, MAX_GRID_SIDE);
        let rows = snap.height.clamp(0, MAX_GRID_SIDE);
        let frame_w = cols as u16 + 2;
        let frame_h = rows as u16 + 2;
        let width = frame_w.max(status.chars().count() as u16);

        fb.resize(width, frame_h + 1);
        fb.clear(self.glyphs.empty);

        self.draw_border(fb, frame_w, frame_h);

        let head = snap.head();
        for y in 0..rows {
            for x in 0..cols {
                let p = Position::new(x, y);
                // Head first, then food, then body.
                let ch = if Some(p) == head {
                    self.glyphs.head
                } else if Some(p) == snap.food {
                    self.glyphs.food
                } else if snap.is_body(p) {
                    self.glyphs.body
                } else {
                    continue;
                };
                fb.put_char(x as u16 + 1, y as u16 + 1, ch);
            }
        }

        fb.put_str(0, frame_h, &status);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(snap, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let g = &self.glyphs;

        fb.put_char(0, 0, g.corner);
        fb.put_char(w - 1, 0, g.corner);
        fb.put_char(0, h - 1, g.corner);
        fb.put_char(w - 1, h - 1, g.corner);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, g.horizontal);
            fb.put_char(dx, h - 1, g.horizontal);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, g.vertical);
            fb.put_char(w - 1, dy, g.vertical);
        }
    }
}

/// The status row: score, controls and, once over, the restart hint.
pub fn status_line(score: u32, game_over: bool) -> String {
    let mut s = format!("Score: {score}{CONTROLS_HINT}");
    if game_over {
        s.push_str(GAME_OVER_HINT);
    }
    s
}
