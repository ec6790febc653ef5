//! ANSI decorations applied to the rendered cow.

use std::f64::consts::PI;
use std::iter;

use log::debug;
use termion::color::{Fg, Rgb};
use termion::style::Bold;

const RESET: &str = "\x1b[0m";

/// Rainbow gradient parameters
const FREQ: f64 = 0.35;
const RED_PHASE: f64 = 0.0;
const GREEN_PHASE: f64 = PI * 2.0 / 3.0;
const BLUE_PHASE: f64 = PI * 4.0 / 3.0;
const STEP: f64 = 0.9; // Cursor advance per character
const LINE_OFFSET: f64 = 3.5; // Cursor shift per line

/// Color at gradient position `pos`, every channel in 1..=255.
pub fn rainbow_rgb(pos: f64) -> Rgb {
    // Truncated, not rounded.
    let channel = |phase: f64| ((FREQ * pos + phase).sin() * 127.0 + 128.0) as u8;
    Rgb(channel(RED_PHASE), channel(GREEN_PHASE), channel(BLUE_PHASE))
}

fn line_start(line: usize) -> f64 {
    line as f64 * LINE_OFFSET + 1.0
}

/// Decodes `input` one code point at a time. Each byte of an invalid sequence
/// becomes its own U+FFFD.
fn glyphs(input: &[u8]) -> impl Iterator<Item = char> + '_ {
    input.utf8_chunks().flat_map(|chunk| {
        let bad = chunk.invalid().len();
        chunk
            .valid()
            .chars()
            .chain(iter::repeat(char::REPLACEMENT_CHARACTER).take(bad))
    })
}

/// Paints every visible character with a truecolor gradient that restarts,
/// shifted, on each line. Whitespace is left uncolored but still advances the
/// gradient.
pub fn rainbow(input: &[u8]) -> Vec<u8> {
    let mut out = String::with_capacity(input.len() * 20);
    let mut line = 0;
    let mut pos = line_start(line);

    for c in glyphs(input) {
        if c == '\n' {
            line += 1;
            pos = line_start(line);
            out.push(c);
            continue;
        }
        if c.is_whitespace() {
            out.push(c);
            pos += STEP;
            continue;
        }
        out.push_str(&format!("{}{c}{RESET}", Fg(rainbow_rgb(pos))));
        pos += STEP;
    }

    out.into_bytes()
}

/// Bolds every non-whitespace character on its own.
pub fn blob(input: &[u8]) -> Vec<u8> {
    let mut out = String::with_capacity(input.len() * 9);
    for c in glyphs(input) {
        if c.is_whitespace() {
            out.push(c);
        } else {
            out.push_str(&format!("{}{c}{RESET}", Bold));
        }
    }
    out.into_bytes()
}

/// Applies the requested decorations, rainbow first.
pub fn decorate(mut out: Vec<u8>, rainbow_on: bool, blob_on: bool) -> Vec<u8> {
    if rainbow_on {
        debug!("applying rainbow");
        out = rainbow(&out);
    }
    if blob_on {
        debug!("applying blob");
        out = blob(&out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn rainbow_letters_and_space() {
        assert_eq!(
            s(rainbow(b"x y\n")),
            "\x1b[38;2;171;209;2mx\x1b[0m \x1b[38;2;233;136;13my\x1b[0m\n"
        );
    }

    #[test]
    fn rainbow_restarts_each_line() {
        // Line 1 starts at 1 + 3.5 no matter how long line 0 was
        let expected = format!("\n{}a{}", Fg(rainbow_rgb(4.5)), RESET);
        assert!(s(rainbow(b"b\na")).ends_with(&expected));
        assert!(s(rainbow(b"zzzz zzzz\na")).ends_with(&expected));
    }

    #[test]
    fn rainbow_channels_stay_in_range() {
        let mut p = 0.0;
        while p < 40.0 {
            let Rgb(r, g, b) = rainbow_rgb(p);
            assert!(r > 0 && g > 0 && b > 0, "({r}, {g}, {b}) at {p}");
            p += 0.1;
        }
    }

    #[test]
    fn rainbow_keeps_whitespace_plain() {
        assert_eq!(s(rainbow(b" \t\n  ")), " \t\n  ");
    }

    #[test]
    fn empty_input_is_identity() {
        assert!(rainbow(b"").is_empty());
        assert!(blob(b"").is_empty());
    }

    #[test]
    fn blob_letters_and_space() {
        assert_eq!(s(blob(b"x y\n")), "\x1b[1mx\x1b[0m \x1b[1my\x1b[0m\n");
    }

    #[test]
    fn blob_whitespace_is_untouched() {
        for ws in [" ", " \t\n", "\n\n", "\u{a0}\u{2003}"] {
            assert_eq!(s(blob(ws.as_bytes())), ws);
        }
    }

    #[test]
    fn blob_full_width_runes() {
        assert_eq!(
            s(blob("你好\n".as_bytes())),
            "\x1b[1m你\x1b[0m\x1b[1m好\x1b[0m\n"
        );
    }

    #[test]
    fn rainbow_then_blob_wraps_colored_text() {
        let out = s(blob(&rainbow(b"a")));
        assert!(out.contains("\x1b[1ma\x1b[0m"));
        assert!(out.starts_with("\x1b[1m\x1b\x1b[0m"));
    }

    #[test]
    fn decorate_order_is_rainbow_then_blob() {
        assert_eq!(decorate(b"a b".to_vec(), false, false), b"a b");
        assert_eq!(decorate(b"a b".to_vec(), true, true), blob(&rainbow(b"a b")));
        assert_eq!(decorate(b"a".to_vec(), false, true), blob(b"a"));
    }

    #[test]
    fn invalid_bytes_decode_one_replacement_each() {
        // A truncated 3-byte sequence is two bad bytes, not one
        assert_eq!(
            s(blob(b"\xE9\x80A")),
            "\x1b[1m\u{FFFD}\x1b[0m\x1b[1m\u{FFFD}\x1b[0m\x1b[1mA\x1b[0m"
        );

        let out = s(rainbow(b"\xE9\x80A"));
        assert_eq!(out.matches('\u{FFFD}').count(), 2);
        let a = format!("{}A{RESET}", Fg(rainbow_rgb(1.0 + STEP + STEP)));
        assert!(out.ends_with(&a), "{out:?}");
    }

    #[test]
    fn invalid_tail_byte_is_replaced() {
        assert_eq!(s(blob(b"a\xF0")), "\x1b[1ma\x1b[0m\x1b[1m\u{FFFD}\x1b[0m");
    }
}
