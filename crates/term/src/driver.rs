//! Terminal drivers: exclusive ownership of the keyboard and the display.
//!
//! [`TerminalDriver`] is the only seam between the game loop and the host
//! terminal. Platform differences (termios vs. Windows console, ANSI arrow
//! sequences vs. scan codes) stay behind it.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{cursor, event, terminal, Command, QueueableCommand};
use tracing::{debug, warn};

use crate::fb::FrameBuffer;
use crate::input::key_from_event;
use crate::renderer::{encode_clear_into, encode_frame_into, encode_home_into, encode_line_into};
use crate::types::Key;

/// Exclusive terminal capability used by the game loop.
pub trait TerminalDriver {
    /// Disable line buffering and echo. Best-effort: failures are logged and
    /// the caller carries on as if it succeeded.
    fn enter_raw_mode(&mut self);

    /// Undo [`TerminalDriver::enter_raw_mode`]. Safe to call more than once.
    fn restore(&mut self);

    /// Whether a key is waiting. Never blocks.
    fn key_available(&mut self) -> bool;

    /// Next pending key, or `None` if nothing usable is pending. Never blocks.
    fn read_key(&mut self) -> Option<Key>;

    fn clear_screen(&mut self) -> Result<()>;

    fn move_cursor_home(&mut self) -> Result<()>;

    /// Repaint the whole frame from the home position.
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;

    /// Write a line of plain text below the current output.
    fn write_line(&mut self, text: &str) -> Result<()>;
}

impl<D: TerminalDriver + ?Sized> TerminalDriver for Box<D> {
    fn enter_raw_mode(&mut self) {
        (**self).enter_raw_mode()
    }

    fn restore(&mut self) {
        (**self).restore()
    }

    fn key_available(&mut self) -> bool {
        (**self).key_available()
    }

    fn read_key(&mut self) -> Option<Key> {
        (**self).read_key()
    }

    fn clear_screen(&mut self) -> Result<()> {
        (**self).clear_screen()
    }

    fn move_cursor_home(&mut self) -> Result<()> {
        (**self).move_cursor_home()
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        (**self).present(frame)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        (**self).write_line(text)
    }
}

/// Driver for real terminals on every platform crossterm supports.
///
/// Restores the terminal when dropped, so early returns and panics (with
/// unwinding) leave the shell usable.
pub struct CrosstermDriver {
    stdout: io::Stdout,
    buf: Vec<u8>,
    raw: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            raw: false,
        }
    }

    fn write_command(&mut self, command: impl Command) -> Result<()> {
        self.buf.clear();
        self.buf.queue(command)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDriver for CrosstermDriver {
    fn enter_raw_mode(&mut self) {
        if self.raw {
            return;
        }
        if let Err(err) = terminal::enable_raw_mode() {
            warn!(%err, "could not enable raw mode, continuing without it");
        }
        // Remember the attempt either way so restore() still runs.
        self.raw = true;

        if let Err(err) = self.write_command(cursor::Hide) {
            warn!(%err, "could not hide cursor");
        }
    }

    fn restore(&mut self) {
        if !self.raw {
            return;
        }
        self.raw = false;

        if let Err(err) = self.write_command(cursor::Show) {
            warn!(%err, "could not show cursor");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "could not disable raw mode");
        }
    }

    fn key_available(&mut self) -> bool {
        match event::poll(Duration::ZERO) {
            Ok(ready) => ready,
            Err(err) => {
                debug!(%err, "input poll failed");
                false
            }
        }
    }

    fn read_key(&mut self) -> Option<Key> {
        if !self.key_available() {
            return None;
        }
        match event::read() {
            Ok(event::Event::Key(key)) => key_from_event(key),
            Ok(_) => None,
            Err(err) => {
                debug!(%err, "input read failed");
                None
            }
        }
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        self.flush_buf()
    }

    fn move_cursor_home(&mut self) -> Result<()> {
        self.buf.clear();
        encode_home_into(&mut self.buf)?;
        self.flush_buf()
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        encode_line_into(text, &mut self.buf)?;
        self.flush_buf()
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.restore();
    }
}
