//! Pulls the drawable figure out of a `.cow` template.
//!
//! Templates look like
//!
//! ```text
//! # comments, metadata...
//! $the_cow = <<EOC;
//!         \   ^__^
//!          \  (oo)\_______
//! EOC
//! ```
//!
//! Everything between the markers is art. A template without `<<EOC;` is art
//! from top to bottom.

use thiserror::Error;

const START_MARKER: &[u8] = b"<<EOC;";
const END_MARKER: &[u8] = b"EOC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid cow file: no art found")]
pub struct EmptyArt;

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Returns the art region of `template` with trailing newlines removed.
pub fn extract_art(template: &[u8]) -> Result<&[u8], EmptyArt> {
    let mut art = template;
    if let Some(pos) = find(template, START_MARKER) {
        let mut start = pos + START_MARKER.len();
        if template.get(start) == Some(&b'\n') {
            start += 1;
        }
        let rest = &template[start..];
        art = match find(rest, END_MARKER) {
            Some(end) => &rest[..end],
            None => rest,
        };
    }

    while let [head @ .., b'\n'] = art {
        art = head;
    }

    if art.is_empty() {
        return Err(EmptyArt);
    }
    Ok(art)
}
