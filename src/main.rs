use std::path::PathBuf;

use ansi_term::Style;
use color_eyre::eyre::Result;
use structopt::StructOpt;

use chordfinder::colors::{CYAN, RED, WHITE};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "chords",
    about = "Find every chord that fits inside a musical mode."
)]
struct ChordsCommand {
    #[structopt(help = "Root pitch to anchor the mode at, e.g. `C`, `F#`, `Bb`.")]
    pitch: String,

    #[structopt(help = "Name of the mode to search, as defined in the config file.")]
    mode: String,

    #[structopt(
        short = "c",
        long = "config",
        help = "Chord and mode definition file.",
        default_value = "chord_config.yml"
    )]
    config: PathBuf,
}

fn main() {
    let command = ChordsCommand::from_args();

    if let Err(err) = run_command(command) {
        eprintln!("{}", err);
        log(*RED, "error:", "Command failed.");
        std::process::exit(1)
    }
}

fn log(color: Style, prefix: &str, message: &str) {
    eprintln!("{} {}", color.paint(prefix), WHITE.paint(message));
}

fn run_command(command: ChordsCommand) -> Result<()> {
    log(
        *CYAN,
        "Searching",
        &format!("for chords in {} {} ...", command.pitch, command.mode),
    );

    let listing = chordfinder::chords_in_mode(&command.pitch, &command.mode, &command.config)?;
    print!("{}", listing);

    Ok(())
}
