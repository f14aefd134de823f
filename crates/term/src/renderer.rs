//! Frame encoding: turns a framebuffer into terminal bytes.
//!
//! Every frame is a full repaint. It starts with a cursor-home rather than a
//! clear, so the previous frame is overwritten in place without flicker.
//! Each row is right-trimmed and followed by clear-to-end-of-line, which
//! wipes leftovers from a longer previous row (e.g. the game-over hint).

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::fb::FrameBuffer;

/// Encode a full-frame repaint into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    encode_home_into(out)?;

    let mut line = String::with_capacity(fb.width() as usize);
    for y in 0..fb.height() {
        line.clear();
        line.extend(fb.row(y).iter());
        out.queue(Print(line.trim_end_matches(' ')))?;
        out.queue(terminal::Clear(ClearType::UntilNewLine))?;
        // Raw mode does not translate a bare newline.
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

/// Encode a cursor-home.
pub fn encode_home_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Encode a full clear followed by cursor-home.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(ClearType::All))?;
    encode_home_into(out)
}

/// Encode one line of plain text.
pub fn encode_line_into(text: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(text))?;
    out.queue(Print("\r\n"))?;
    Ok(())
}
