use std::process::ExitCode;

use audio::CommandPlayer;
use clap::Parser;
use config::Config;
use controller::{LookupController, LookupState};
use dictionary::Dictionary;
use surface::TerminalSurface;
use tracing_subscriber::EnvFilter;
use utilities::{input, parse_command, Command};

mod audio;
mod config;
mod controller;
mod surface;
mod utilities;
mod view;

const HELP: &str = "\
Type a word to look it up.
  :N            look up the N-th synonym or antonym shown
  play, p       listen to the pronunciation
  define WORD   look up WORD even if it is a command
  quit, q       leave";

/// Look up English words in the free dictionary API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Word to look up right away.
    word: Option<String>,
    /// Exit after looking up WORD instead of starting the prompt.
    #[arg(long, requires = "word")]
    once: bool,
    /// Dictionary API address the word is appended to.
    #[arg(long)]
    api_url: Option<String>,
    /// Program used to play pronunciations.
    #[arg(long)]
    player: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::new();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(player) = cli.player {
        config.audio_player = player;
    }
    tracing::debug!(?config, "starting");

    let dict = Dictionary::with_base_url(&config.api_url)?;
    let player = CommandPlayer::new(config.audio_player, config.audio_player_args);
    let controller = LookupController::new(dict, TerminalSurface::stdout(), player);

    if let Some(word) = &cli.word {
        controller.submit(word).await;
        if cli.once {
            let failed = lookup_failed(&controller.state());
            return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
        }
    }

    while let Some(line) = input(">> ")? {
        match parse_command(&line) {
            Command::Exit => break,
            Command::Help => println!("{HELP}"),
            Command::Play => match controller.audio() {
                Some(action) => controller.activate(&action).await,
                None => println!("No pronunciation to play."),
            },
            Command::Select(number) => match controller.action(number) {
                Some(action) => controller.activate(&action).await,
                None => println!("There is no term [{number}]."),
            },
            Command::Lookup(word) => controller.submit(word).await,
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Whether a one-shot lookup should exit with a failure status.
fn lookup_failed(state: &LookupState) -> bool {
    matches!(state, LookupState::Error(_))
}
