use std::fmt::Write;

use crate::config::ChordTable;
use crate::pitch::{self, PitchError, PitchNames};

/// Every chord found rooted at one scale degree. `root` is the reduced
/// semitone index of that degree; `chords` holds one formatted label per
/// matching shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMatches {
    pub root: i32,
    pub chords: Vec<String>,
}

pub fn name_chord(root: i32, chord_name: &str, names: &PitchNames) -> String {
    format!("{:<2}{}", names.name(root), chord_name)
}

/// Finds every chord shape fully contained in the mode, rooted at each of the
/// mode's scale degrees in turn.
///
/// Containment is tested against the mode's unreduced offset sequence: a
/// shape fits only if each of its offsets, reduced from the candidate root,
/// appears verbatim among the expanded degrees. The final octave degree (12)
/// is what lets shapes rooted near the top of the scale wrap around; offsets
/// reaching past the listed span never match.
pub fn find_chords(
    mode: &[i32],
    names: &PitchNames,
    chords: &ChordTable,
) -> Result<Vec<RootMatches>, PitchError> {
    let mut matches: Vec<RootMatches> = Vec::new();

    for &offset in mode {
        let root = pitch::reset_octave(offset)?;

        // The octave degree reduces to the tonic's index. Only the first
        // encounter of each root is recorded.
        if matches.iter().any(|found| found.root == root) {
            continue;
        }

        let mut found = Vec::new();
        for (offsets, chord_name) in chords {
            let mut fits = true;
            for &x in offsets {
                if !mode.contains(&pitch::reset_octave(root + x)?) {
                    fits = false;
                    break;
                }
            }

            if fits {
                found.push(name_chord(root, chord_name, names));
            }
        }

        if !found.is_empty() {
            matches.push(RootMatches {
                root,
                chords: found,
            });
        }
    }

    Ok(matches)
}

/// Renders matches one label per line, grouped by root in scale-degree order,
/// sorted alphabetically within each group.
pub fn render(matches: &[RootMatches]) -> String {
    let mut buffer = String::new();

    for root_matches in matches {
        let mut labels = root_matches.chords.clone();
        labels.sort();

        for label in &labels {
            writeln!(buffer, " - {}", label).unwrap();
        }
    }

    buffer
}
