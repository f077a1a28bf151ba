use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;

fn shipped_config() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/chord_config.yml"))
}

#[test]
fn c_major_lists_the_diatonic_chords() {
    let listing = chordfinder::chords_in_mode("C", "major", shipped_config()).unwrap();

    let expected = " - C 6
 - C maj
 - C maj7
 - C sus2
 - C sus4
 - D m
 - D m6
 - D m7
 - D sus2
 - D sus4
 - E m
 - E m7
 - E sus4
 - F 6
 - F maj
 - F maj7
 - F sus2
 - G 6
 - G 7
 - G maj
 - G sus2
 - G sus4
 - A m
 - A m7
 - A sus2
 - A sus4
 - B dim
 - B m7b5
";

    assert_eq!(listing, expected);
}

#[test]
fn messiaen_mode_5_from_g() {
    let listing =
        chordfinder::chords_in_mode("G", "messiaen_mode_5", shipped_config()).unwrap();

    let expected = " - G sus4
 - C sus2
 - C#sus4
 - F#sus2
";

    assert_eq!(listing, expected);
}

#[test]
fn flat_roots_produce_flat_listings() {
    let listing = chordfinder::chords_in_mode("Eb", "major", shipped_config()).unwrap();

    assert!(listing.starts_with(" - Eb6\n"));
    assert!(listing.contains(" - Ebmaj7\n"));
    assert!(listing.contains(" - Bb7\n"));
    assert!(listing.ends_with(" - D m7b5\n"));
    assert!(!listing.contains('#'));
}

#[test]
fn custom_config_files_are_honoured() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "chord_definitions:\n\
         \x20 m: '(3, 7)'\n\
         \x20 m7: '(3, 7, 10)'\n\
         \x20 m7b5: '(3, 6, 10)'\n\
         mode_definitions:\n\
         \x20 dorian: [2, 1, 2, 2, 2, 1, 2]\n"
    )
    .unwrap();

    let listing = chordfinder::chords_in_mode("D", "dorian", file.path()).unwrap();

    let expected = " - D m
 - D m7
 - E m
 - E m7
 - A m
 - A m7
 - B m7b5
";

    assert_eq!(listing, expected);
}

#[test]
fn unknown_pitches_fail_before_any_output() {
    let error = chordfinder::chords_in_mode("H", "major", shipped_config()).unwrap_err();

    assert!(error.to_string().contains("No pitch named `H` exists"));
}

#[test]
fn unknown_modes_fail_with_the_known_ones() {
    let error = chordfinder::chords_in_mode("C", "majro", shipped_config()).unwrap_err();

    let message = error.to_string();
    assert!(message.contains("No mode named `majro` is defined"));
    assert!(message.contains("major"));
}

#[test]
fn missing_config_files_are_reported() {
    let error =
        chordfinder::chords_in_mode("C", "major", Path::new("no_such_config.yml")).unwrap_err();

    assert!(error.to_string().contains("Failed to read config file"));
}

#[test]
fn malformed_config_files_are_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "chord_definitions: nonsense\n").unwrap();

    let error = chordfinder::chords_in_mode("C", "major", file.path()).unwrap_err();

    assert!(error.to_string().contains("is not valid YAML"));
}
