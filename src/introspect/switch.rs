//! Option-line parsing for help listings.

use anyhow::{bail, Result};

use crate::model::Switch;

/// Parse one help line as a [`Switch`].
///
/// A candidate line starts with a hyphen (after indentation) and carries a
/// run of two-or-more spaces between the flag field and the description.
/// Hyphen-prefixed lines without that gap are wrapped description text from
/// the previous entry and yield `Ok(None)`, as do non-option lines. A flag
/// field that passes the gap check but does not parse is a fatal error.
pub(super) fn parse_switch_line(line: &str) -> Result<Option<Switch>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('-') {
        return Ok(None);
    }
    let Some((flag_field, description)) = split_on_gap(trimmed) else {
        return Ok(None);
    };

    let mut shorts = Vec::new();
    let mut longs = Vec::new();
    let mut metavar = None;
    for token in flag_field.split(", ") {
        // "-f FILE" carries the value placeholder after a single space;
        // the last one seen wins.
        let (flag, value) = match token.split_once(' ') {
            Some((flag, value)) => (flag, Some(value.trim())),
            None => (token, None),
        };
        if let Some(value) = value {
            metavar = Some(value.to_string());
        }

        if let Some(name) = flag.strip_prefix("--") {
            if name.is_empty() {
                bail!("malformed option line: {line:?}");
            }
            longs.push(name.to_string());
        } else if let Some(name) = flag.strip_prefix('-') {
            if name.is_empty() {
                bail!("malformed option line: {line:?}");
            }
            shorts.push(name.to_string());
        } else {
            bail!("malformed option line: {line:?}");
        }
    }
    if shorts.is_empty() && longs.is_empty() {
        bail!("malformed option line: {line:?}");
    }

    Ok(Some(Switch {
        shorts,
        longs,
        description: description.to_string(),
        metavar,
    }))
}

/// Split at the first run of two-or-more blanks, returning the flag field
/// and the description with surrounding whitespace removed.
fn split_on_gap(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    for i in 0..bytes.len().saturating_sub(1) {
        if is_blank(bytes[i]) && is_blank(bytes[i + 1]) {
            return Some((&line[..i], line[i..].trim_start()));
        }
    }
    None
}

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}
