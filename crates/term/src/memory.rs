//! In-memory terminal driver.
//!
//! Input is scripted as raw bytes grouped into batches: batch `n` is what the
//! game loop finds pending on its `n`-th poll (the first batch is visible
//! immediately). Once a batch has been drained, `key_available` reports
//! `false` and the next batch becomes current. Bytes go through the same raw
//! decoder a byte-oriented console would use, so arrow escape sequences and
//! Windows scan-code pairs can be scripted too.
//!
//! Output is kept both as encoded bytes and as plain-text frames.

use std::collections::VecDeque;

use anyhow::Result;

use crate::fb::FrameBuffer;
use crate::input::decode;
use crate::renderer::{encode_clear_into, encode_frame_into, encode_home_into, encode_line_into};
use crate::types::Key;
use crate::TerminalDriver;

#[derive(Debug, Default)]
pub struct MemoryDriver {
    pending: VecDeque<Vec<u8>>,
    current: Vec<u8>,
    raw: bool,
    output: Vec<u8>,
    frames: Vec<String>,
    lines: Vec<String>,
    clears: usize,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script input batches, one per loop iteration.
    pub fn with_input<I, B>(batches: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut pending: VecDeque<Vec<u8>> =
            batches.into_iter().map(|b| b.as_ref().to_vec()).collect();
        let current = pending.pop_front().unwrap_or_default();
        Self {
            pending,
            current,
            ..Self::default()
        }
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Every byte written so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Text of each presented frame, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Lines written with [`TerminalDriver::write_line`].
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl TerminalDriver for MemoryDriver {
    fn enter_raw_mode(&mut self) {
        self.raw = true;
    }

    fn restore(&mut self) {
        self.raw = false;
    }

    fn key_available(&mut self) -> bool {
        if !self.current.is_empty() {
            return true;
        }
        self.current = self.pending.pop_front().unwrap_or_default();
        false
    }

    fn read_key(&mut self) -> Option<Key> {
        let (key, used) = decode(&self.current)?;
        self.current.drain(..used);
        Some(key)
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        encode_clear_into(&mut self.output)
    }

    fn move_cursor_home(&mut self) -> Result<()> {
        encode_home_into(&mut self.output)
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.frames.push(frame.to_text());
        encode_frame_into(frame, &mut self.output)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.lines.push(text.to_string());
        encode_line_into(text, &mut self.output)
    }
}
