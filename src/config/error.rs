use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{path}`.")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file `{path}` is not valid YAML.")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "Chord `{chord}` has an invalid offset list `{text}`. Offset lists may only \
         contain integers separated by commas, optionally inside brackets."
    )]
    InvalidOffsetList { chord: String, text: String },

    #[error("No mode named `{name}` is defined. Defined modes are: {known}.")]
    UnknownMode { name: String, known: String },
}
