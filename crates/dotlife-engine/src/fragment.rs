//! Load and publish hooks for the persisted fragment text.
//!
//! The fragment is the entire shareable state: an optional rule directive
//! followed by the Braille grid body. Hosts that read it from a URL hand it
//! over percent-encoded and possibly with its leading `#`; [`normalize`]
//! undoes both before decoding.
//!
//! Older links frame the grid as `#|<rows>|`. Encoded grids never contain an
//! empty row, so [`load`] drops that framing before decoding.

use std::error::Error;
use std::fmt;

use dotlife_core::LifeState;

use crate::seed;

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from undoing URL escaping on a raw fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentError {
    /// A `%` was not followed by two hex digits.
    InvalidEscape {
        /// Byte offset of the `%`.
        offset: usize,
    },
    /// The unescaped bytes are not UTF-8.
    InvalidUtf8,
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape { offset } => {
                write!(f, "invalid percent escape at byte {offset}")
            }
            Self::InvalidUtf8 => write!(f, "percent-decoded fragment is not UTF-8"),
        }
    }
}

impl Error for FragmentError {}

// ── Publisher ──────────────────────────────────────────────────────

/// Sink for published fragment text (e.g. `history.replaceState`).
pub trait Publisher {
    /// Persist `fragment`, replacing whatever was published before.
    fn publish(&mut self, fragment: &str);
}

// ── Hooks ──────────────────────────────────────────────────────────

/// Strip a leading `#` and decode `%XX` escapes.
pub fn normalize(raw: &str) -> Result<String, FragmentError> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).and_then(|&b| hex_value(b));
            let lo = bytes.get(i + 2).and_then(|&b| hex_value(b));
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
                _ => return Err(FragmentError::InvalidEscape { offset: i }),
            }
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| FragmentError::InvalidUtf8)
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

/// Drop a leading `|` (only when no directive precedes it) and a trailing
/// `|`.
pub fn unframe(text: &str) -> &str {
    let text = text.strip_prefix('|').unwrap_or(text);
    text.strip_suffix('|').unwrap_or(text)
}

/// Produce the initial state from the current fragment, if any.
///
/// Absent, empty, or malformed text yields [`seed::seed_state`]. Nothing is
/// surfaced to the user; the reason is logged at `debug`.
pub fn load(raw: Option<&str>) -> LifeState {
    let Some(raw) = raw else {
        tracing::debug!("no fragment, using seed pattern");
        return seed::seed_state();
    };
    let text = match normalize(raw) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = %e, "fragment not decodable, using seed pattern");
            return seed::seed_state();
        }
    };
    let text = unframe(&text);
    if text.is_empty() {
        tracing::debug!("empty fragment, using seed pattern");
        return seed::seed_state();
    }
    match LifeState::decode(text) {
        Ok(state) => state,
        Err(e) => {
            tracing::debug!(error = %e, "fragment not parseable, using seed pattern");
            seed::seed_state()
        }
    }
}

/// The fragment text to persist for `state` (without a leading `#`).
pub fn publish(state: &LifeState) -> String {
    state.encode()
}
