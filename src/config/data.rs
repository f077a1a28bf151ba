use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::error::ConfigError;

/// Chord shapes keyed by their offsets from an implicit root of 0. Duplicate
/// offset lists in the config overwrite earlier names.
pub type ChordTable = BTreeMap<Vec<i32>, String>;

/// The config file as written: chord names mapped to offset-list expressions,
/// mode names mapped to step separations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawConfig {
    pub chord_definitions: BTreeMap<String, String>,
    pub mode_definitions: BTreeMap<String, Vec<i32>>,
}

/// The resolved lookup tables: chord offsets inverted into table keys, and
/// every mode already expanded into absolute scale-degree offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub chords: ChordTable,
    pub modes: BTreeMap<String, Vec<i32>>,
}

impl Config {
    pub fn mode(&self, name: &str) -> Result<&[i32], ConfigError> {
        self.modes
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::UnknownMode {
                name: name.to_owned(),
                known: self.modes.keys().cloned().collect::<Vec<_>>().join(", "),
            })
    }
}
