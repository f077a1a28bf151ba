pub mod data;
pub mod error;

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::pitch;

pub use self::data::{ChordTable, Config, RawConfig};
pub use self::error::ConfigError;

/// Reads and resolves the chord/mode definition file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_owned(),
        source,
    })?;

    let raw: RawConfig =
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Malformed {
            path: path.to_owned(),
            source,
        })?;

    resolve(raw)
}

/// Turns the raw config into lookup tables: chord offset lists become table
/// keys, and every mode's step separations are expanded up front.
pub fn resolve(raw: RawConfig) -> Result<Config, ConfigError> {
    let mut chords = ChordTable::new();

    for (name, expr) in &raw.chord_definitions {
        let offsets =
            parse_offset_list(expr).ok_or_else(|| ConfigError::InvalidOffsetList {
                chord: name.clone(),
                text: expr.clone(),
            })?;
        chords.insert(offsets, name.clone());
    }

    let modes = raw
        .mode_definitions
        .into_iter()
        .map(|(name, seps)| (name, pitch::expand_steps(&seps)))
        .collect();

    Ok(Config { chords, modes })
}

lazy_static! {
    static ref OFFSET_LIST_PATTERN: Regex =
        Regex::new(r"^[\[(]?\s*(?:-?\d+(?:\s*,\s*-?\d+)*\s*,?)?\s*[\])]?$").unwrap();
}

/// Parses a literal offset-list expression such as `(3, 7, 10)` or `[4, 7]`.
/// Only integers, commas, and surrounding brackets are accepted; anything
/// resembling executable syntax is rejected.
pub fn parse_offset_list(text: &str) -> Option<Vec<i32>> {
    let text = text.trim();

    if !OFFSET_LIST_PATTERN.is_match(text) {
        return None;
    }

    let inner = text.trim_start_matches(['(', '[']).trim_end_matches([')', ']']);

    let mut offsets = Vec::new();
    for part in inner.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        offsets.push(part.parse().ok()?);
    }

    Some(offsets)
}
