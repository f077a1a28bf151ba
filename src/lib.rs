pub mod colors;
pub mod config;
pub mod pitch;
pub mod search;

mod error;

pub use crate::error::Error;

use std::path::Path;

/// Finds every configured chord shape that fits inside the named mode when
/// anchored at `pitch`, returning the rendered listing: one ` - <label>` line
/// per chord, grouped by scale degree, sorted within each group.
pub fn chords_in_mode(pitch: &str, mode_name: &str, config_path: &Path) -> Result<String, Error> {
    let config = config::load(config_path)?;
    let mode = config.mode(mode_name)?;
    let names = pitch::pitch_names(pitch, true)?;
    let matches = search::find_chords(mode, &names, &config.chords)?;

    Ok(search::render(&matches))
}
