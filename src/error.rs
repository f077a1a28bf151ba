use thiserror::Error;

use crate::config::ConfigError;
use crate::pitch::PitchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pitch(#[from] PitchError),
}
