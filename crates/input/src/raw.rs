//! Raw byte decoding for byte-oriented consoles.
//!
//! Printable ASCII maps to [`Key::Char`]. Arrow keys arrive as multi-byte
//! sequences whose shape depends on the platform:
//!
//! - ANSI terminals: `ESC [ A..D` (or `ESC O A..D` in application cursor mode).
//!   Modified arrows carry parameters (`ESC [ 1 ; 5 A` for Ctrl+Up) and still
//!   decode to the plain arrow. Any other CSI sequence is consumed whole and
//!   decodes to [`Key::Other`].
//! - Windows console (`_getch` style): a `0xE0` or `0x00` prefix followed by
//!   one scan code (72 up, 80 down, 75 left, 77 right)
//!
//! Input is treated as single-byte codes; non-ASCII bytes outside those
//! prefixes decode to [`Key::Other`].
//!
//! The scan-code prefixes are recognised on every stream. On a UTF-8 terminal
//! `0xE0` is a lead byte and `0x00` is Ctrl+Space, so there the byte after
//! either one is swallowed, and `NUL` followed by `H`, `P`, `K` or `M`
//! decodes as an arrow. Neither sequence is produced by the game's keys.

use crate::types::{Direction, Key};

const ETX: u8 = 0x03;
const ESC: u8 = 0x1b;
const WIN_PREFIX_EXT: u8 = 0xe0;
const WIN_PREFIX_FN: u8 = 0x00;

/// Decode the next key from `bytes`.
///
/// Returns the key and how many bytes it consumed, or `None` when `bytes` is
/// empty. An incomplete escape sequence decodes as a lone [`Key::Other`] so
/// the caller always makes progress.
pub fn decode(bytes: &[u8]) -> Option<(Key, usize)> {
    let (&first, rest) = bytes.split_first()?;

    let decoded = match first {
        ETX => (Key::Interrupt, 1),
        ESC => decode_escape(rest),
        WIN_PREFIX_EXT | WIN_PREFIX_FN => match rest.first() {
            Some(&scan) => (scan_code(scan).map(Key::Arrow).unwrap_or(Key::Other), 2),
            None => (Key::Other, 1),
        },
        0x20..=0x7e => (Key::Char(first as char), 1),
        _ => (Key::Other, 1),
    };
    Some(decoded)
}

fn decode_escape(rest: &[u8]) -> (Key, usize) {
    match rest {
        [b'[', tail @ ..] => decode_csi(tail),
        [b'O', code, ..] => (arrow_or_other(*code), 3),
        _ => (Key::Other, 1),
    }
}

/// `ESC [` then parameter bytes, intermediate bytes and one final byte.
fn decode_csi(tail: &[u8]) -> (Key, usize) {
    let params = tail
        .iter()
        .take_while(|b| (0x30..=0x3f).contains(*b))
        .count();
    let intermediates = tail[params..]
        .iter()
        .take_while(|b| (0x20..=0x2f).contains(*b))
        .count();
    let end = params + intermediates;

    match tail.get(end) {
        // ESC, '[' and the final byte.
        Some(&code) if (0x40..=0x7e).contains(&code) => (arrow_or_other(code), end + 3),
        _ => (Key::Other, 1),
    }
}

fn arrow_or_other(code: u8) -> Key {
    ansi_arrow(code).map(Key::Arrow).unwrap_or(Key::Other)
}

fn ansi_arrow(code: u8) -> Option<Direction> {
    match code {
        b'A' => Some(Direction::Up),
        b'B' => Some(Direction::Down),
        b'C' => Some(Direction::Right),
        b'D' => Some(Direction::Left),
        _ => None,
    }
}

fn scan_code(code: u8) -> Option<Direction> {
    match code {
        72 => Some(Direction::Up),
        80 => Some(Direction::Down),
        75 => Some(Direction::Left),
        77 => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(mut bytes: &[u8]) -> Vec<Key> {
        let mut keys = Vec::new();
        while let Some((key, used)) = decode(bytes) {
            keys.push(key);
            bytes = &bytes[used..];
        }
        keys
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(decode(b"w"), Some((Key::Char('w'), 1)));
        assert_eq!(decode(b"Q"), Some((Key::Char('Q'), 1)));
        assert_eq!(
            decode_all(b"wasd"),
            vec![
                Key::Char('w'),
                Key::Char('a'),
                Key::Char('s'),
                Key::Char('d')
            ]
        );
    }

    #[test]
    fn test_ansi_arrows() {
        assert_eq!(decode(b"\x1b[A"), Some((Key::Arrow(Direction::Up), 3)));
        assert_eq!(decode(b"\x1b[B"), Some((Key::Arrow(Direction::Down), 3)));
        assert_eq!(decode(b"\x1b[C"), Some((Key::Arrow(Direction::Right), 3)));
        assert_eq!(decode(b"\x1b[D"), Some((Key::Arrow(Direction::Left), 3)));
        assert_eq!(decode(b"\x1bOA"), Some((Key::Arrow(Direction::Up), 3)));
    }

    #[test]
    fn test_modified_arrows_keep_their_direction() {
        assert_eq!(decode(b"\x1b[1;5A"), Some((Key::Arrow(Direction::Up), 6)));
        assert_eq!(decode(b"\x1b[1;2B"), Some((Key::Arrow(Direction::Down), 6)));
        assert_eq!(decode(b"\x1b[1;5D"), Some((Key::Arrow(Direction::Left), 6)));
        assert_eq!(
            decode_all(b"\x1b[1;5Ad"),
            vec![Key::Arrow(Direction::Up), Key::Char('d')]
        );
    }

    #[test]
    fn test_other_csi_sequences_are_consumed_whole() {
        // Insert, F5, and a sequence with an intermediate byte.
        assert_eq!(decode(b"\x1b[2~"), Some((Key::Other, 4)));
        assert_eq!(decode(b"\x1b[15~"), Some((Key::Other, 5)));
        assert_eq!(decode(b"\x1b[0 q"), Some((Key::Other, 5)));
        assert_eq!(decode_all(b"\x1b[2~w"), vec![Key::Other, Key::Char('w')]);
    }

    #[test]
    fn test_modified_arrows_never_leak_letters() {
        let keys = decode_all(b"\x1b[1;5A\x1b[1;5D\x1b[3;2C");
        assert_eq!(
            keys,
            vec![
                Key::Arrow(Direction::Up),
                Key::Arrow(Direction::Left),
                Key::Arrow(Direction::Right)
            ]
        );
    }

    #[test]
    fn test_windows_scan_codes() {
        assert_eq!(decode(&[0xe0, 72]), Some((Key::Arrow(Direction::Up), 2)));
        assert_eq!(decode(&[0xe0, 80]), Some((Key::Arrow(Direction::Down), 2)));
        assert_eq!(decode(&[0xe0, 75]), Some((Key::Arrow(Direction::Left), 2)));
        assert_eq!(decode(&[0x00, 77]), Some((Key::Arrow(Direction::Right), 2)));
        assert_eq!(decode(&[0xe0, 83]), Some((Key::Other, 2)));
    }

    #[test]
    fn test_incomplete_sequences_still_progress() {
        assert_eq!(decode(b"\x1b"), Some((Key::Other, 1)));
        assert_eq!(decode(b"\x1b["), Some((Key::Other, 1)));
        assert_eq!(decode(&[0xe0]), Some((Key::Other, 1)));
        assert_eq!(decode(b"\x1b[1;5"), Some((Key::Other, 1)));
        assert_eq!(decode_all(b"\x1b[1"), vec![Key::Other, Key::Char('['), Key::Char('1')]);
    }

    #[test]
    fn test_scan_code_prefix_applies_to_every_stream() {
        // NUL (Ctrl+Space) followed by 'H' reads as the Up scan code.
        assert_eq!(decode(b"\x00H"), Some((Key::Arrow(Direction::Up), 2)));
        // A UTF-8 lead byte swallows its first continuation byte.
        assert_eq!(decode("\u{e9}".as_bytes()), Some((Key::Other, 1)));
        assert_eq!(decode(&[0xe0, 0xa4, 0x85]), Some((Key::Other, 2)));
    }

    #[test]
    fn test_mixed_stream() {
        assert_eq!(
            decode_all(b"d\x1b[Aq\x03"),
            vec![
                Key::Char('d'),
                Key::Arrow(Direction::Up),
                Key::Char('q'),
                Key::Interrupt
            ]
        );
    }
}
