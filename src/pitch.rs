use thiserror::Error;

pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PitchError {
    #[error(
        "No pitch named `{name}` exists. Pitch names are a capital letter from A to G, \
         optionally followed by `#` or `b`."
    )]
    UnknownPitch { name: String },

    #[error("Octave reduction of `{value}` escaped the 0-11 range. This is a bug.")]
    OctaveOverflow { value: i32 },
}

/// The twelve pitch-class names, indexed by semitone distance from a chosen
/// root. Index 0 is always the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchNames {
    names: [&'static str; 12],
}

impl PitchNames {
    pub fn name(&self, index: i32) -> &'static str {
        self.names[index.rem_euclid(12) as usize]
    }
}

/// Builds the index-to-name mapping rotated so that `starting_pitch` sits at
/// index 0. A flat root forces flat spelling regardless of `prefer_sharps`.
pub fn pitch_names(starting_pitch: &str, prefer_sharps: bool) -> Result<PitchNames, PitchError> {
    let sharps = prefer_sharps && !starting_pitch.contains('b');
    let canonical = if sharps { &SHARP_NAMES } else { &FLAT_NAMES };

    let diff = canonical
        .iter()
        .position(|&name| name == starting_pitch)
        .ok_or_else(|| PitchError::UnknownPitch {
            name: starting_pitch.to_owned(),
        })? as i32;

    let mut names = [""; 12];
    for (position, &name) in canonical.iter().enumerate() {
        let index = reset_octave(position as i32 - diff)?;
        names[index as usize] = name;
    }

    Ok(PitchNames { names })
}

/// Reduces any interval to the 0-11 range by stepping in octaves. Each step
/// moves strictly toward the range, so overshooting the opposite boundary
/// signals a logic error rather than bad input.
pub fn reset_octave(num: i32) -> Result<i32, PitchError> {
    let mut num = num;

    while num < 0 {
        num += 12;
        if num > 11 {
            return Err(PitchError::OctaveOverflow { value: num });
        }
    }

    while num > 11 {
        num -= 12;
        if num < 0 {
            return Err(PitchError::OctaveOverflow { value: num });
        }
    }

    Ok(num)
}

/// Converts a mode's consecutive step separations into absolute scale-degree
/// offsets from the tonic. Always yields one more element than its input,
/// beginning with 0.
pub fn expand_steps(seps: &[i32]) -> Vec<i32> {
    let mut offsets = Vec::with_capacity(seps.len() + 1);
    let mut total = 0;

    offsets.push(0);
    for &sep in seps {
        total += sep;
        offsets.push(total);
    }

    offsets
}
