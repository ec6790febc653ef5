use concat_string::concat_string;
use log::trace;

use crate::width::str_width;

/// Wrap column used when the caller asks for zero or a negative width.
pub const DEFAULT_WRAP: usize = 40;

/// Output for a message with no words at all.
const EMPTY_BALLOON: &str = "< >";

/// One physical row of the balloon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub text: String,
    pub width: usize,
}

impl WrappedLine {
    fn new(text: String) -> Self {
        let width = str_width(&text);
        WrappedLine { text, width }
    }
}

/// Wrapped message lines plus the width of the widest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balloon {
    pub lines: Vec<WrappedLine>,
    pub max_width: usize,
}

impl Balloon {
    /// Greedy word wrap: a word joins the current line when the line, a space
    /// and the word fit in `wrap` columns. Words wider than `wrap` overflow on
    /// a line of their own and are never split.
    pub fn wrap(msg: &str, wrap: i64) -> Self {
        let wrap = if wrap <= 0 { DEFAULT_WRAP } else { wrap as usize };

        let mut lines = Vec::new();
        let mut words = msg.split_whitespace();
        if let Some(first) = words.next() {
            let mut cur = first.to_owned();
            let mut cur_width = str_width(first);
            for word in words {
                let word_width = str_width(word);
                if cur_width + 1 + word_width <= wrap {
                    cur.push(' ');
                    cur.push_str(word);
                    cur_width += 1 + word_width;
                    continue;
                }
                lines.push(WrappedLine::new(std::mem::take(&mut cur)));
                cur.push_str(word);
                cur_width = word_width;
            }
            lines.push(WrappedLine::new(cur));
        }

        let max_width = lines.iter().map(|l| l.width).max().unwrap_or(0);
        Balloon { lines, max_width }
    }

    /// Draws the bordered balloon. The bottom border has no trailing newline.
    pub fn draw(&self) -> String {
        let max = self.max_width;
        let rule = max + 2;
        let mut o = String::with_capacity((rule + 4) * (self.lines.len() + 2));

        let pad = |line: &WrappedLine| " ".repeat(max - line.width);
        match self.lines.as_slice() {
            [] => return EMPTY_BALLOON.to_owned(),
            [only] => {
                push_top(&mut o, rule);
                let p = pad(only);
                o.push_str(&concat_string!("< ", only.text, " ", p, ">\n"));
            }
            [first, middle @ .., last] => {
                push_top(&mut o, rule);
                let p = pad(first);
                o.push_str(&concat_string!("/ ", first.text, " ", p, "\\\n"));
                for line in middle {
                    let p = pad(line);
                    o.push_str(&concat_string!("| ", line.text, "  ", p, "|\n"));
                }
                let p = pad(last);
                o.push_str(&concat_string!("\\ ", last.text, " ", p, "/\n"));
            }
        }

        o.push(' ');
        o.push_str("-".repeat(rule).as_str());
        o
    }
}

fn push_top(o: &mut String, rule: usize) {
    o.push(' ');
    o.push_str("_".repeat(rule).as_str());
    o.push('\n');
}

/// Wraps `msg` at `wrap` columns (40 when `wrap <= 0`) and draws the balloon.
pub fn build_balloon(msg: &str, wrap: i64) -> Vec<u8> {
    let balloon = Balloon::wrap(msg, wrap);
    trace!(
        "balloon: {} line(s), max width {}",
        balloon.lines.len(),
        balloon.max_width
    );
    balloon.draw().into_bytes()
}
