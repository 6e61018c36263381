//! Hangman - terminal word-guessing game.
//!
//! Runs one-shot catalogue commands, non-interactive evaluation, or the
//! interactive menu.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use hangman::{
    Cli, ConsoleUi, FileStorage, GameConfig, GameService, HangmanError, MenuChoice, Mode, Storage,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(HangmanError::Interrupted) => {
            println!("\n{}", HangmanError::Interrupted);
            Ok(())
        }
        Err(e) => {
            eprintln!("Ошибка: {e}");
            std::process::exit(1);
        }
    }
}

/// Dispatches the parsed command line.
#[instrument(skip(cli))]
fn run(cli: &Cli) -> Result<(), HangmanError> {
    let mode = cli.mode();
    debug!(?mode, "Resolved mode");

    let load_config = || GameConfig::load(cli.config.as_deref());

    match mode {
        Mode::Evaluate { word, guesses } => {
            println!("{}", hangman::evaluate(&word, &guesses)?);
            Ok(())
        }
        Mode::Incomplete => Err(HangmanError::InvalidInput(
            "Для проверки нужны слово и буквы".to_string(),
        )),
        Mode::Categories => {
            println!("{}", hangman::list_categories(&load_config()?));
            Ok(())
        }
        Mode::Levels => {
            println!("{}", hangman::list_levels(&load_config()?));
            Ok(())
        }
        Mode::Words(category) => {
            println!("{}", hangman::list_words(&load_config()?, &category)?);
            Ok(())
        }
        Mode::Hint(word) => {
            println!("{}", hangman::show_hint(&load_config()?, &word)?);
            Ok(())
        }
        Mode::Check(word) => {
            println!("{}", hangman::check_word(&load_config()?, &word)?);
            Ok(())
        }
        Mode::Statistics => {
            let storage = FileStorage::new(load_config()?, &cli.stats_file);
            let stats = storage.load_statistics()?;
            ConsoleUi::stdio().show_statistics(&stats);
            Ok(())
        }
        Mode::Interactive { category, level } => {
            let storage = FileStorage::new(load_config()?, &cli.stats_file);
            run_interactive(storage, category.as_deref(), level.as_deref())
        }
    }
}

/// Main menu loop. One service is kept for the whole run so wins in a row
/// count towards streak achievements.
#[instrument(skip(storage))]
fn run_interactive(
    storage: FileStorage,
    category: Option<&str>,
    level: Option<&str>,
) -> Result<(), HangmanError> {
    let mut service = GameService::new(storage, ConsoleUi::stdio());

    loop {
        match service.ui_mut().main_menu()? {
            MenuChoice::Play => {
                let summary = service.run_session(category, level)?;
                info!(match_id = %summary.match_id(), score = *summary.score(), "Game finished");
            }
            MenuChoice::Statistics => {
                let stats = service.storage().load_statistics()?;
                service.ui_mut().show_statistics(&stats);
            }
            MenuChoice::Exit => {
                println!("До свидания!");
                return Ok(());
            }
        }

        if let Err(HangmanError::Interrupted) = service.ui_mut().pause() {
            debug!("Input closed after a finished screen");
            println!("\nДо свидания!");
            return Ok(());
        }
    }
}
