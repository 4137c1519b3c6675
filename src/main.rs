//! Word Scramble - CLI
//!
//! Word derivation game with TUI and line-based modes.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_words, print_survey_statistics, run_simple, run_survey},
    config::GameConfig,
    game::GameSession,
    output::print_check_result,
    rules::WordValidator,
    wordlists::{DICTIONARY, Lexicon, START_WORDS, WordList, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file (`minimum_word_length`, `language`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Minimum word length (overrides the config file)
    #[arg(short = 'm', long, global = true)]
    min_length: Option<usize>,

    /// Dictionary language code (overrides the config file)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Root word list file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    roots: Option<PathBuf>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'word_scramble=trace' (default: `RUST_LOG` or 'warn')
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check words against a given root word
    Check {
        /// The root word to play against
        #[arg(short = 'w', long)]
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },

    /// Survey how many words each root word offers
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Flag root words offering fewer words than this
        #[arg(short = 'k', long, default_value = "5")]
        min_words: usize,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_level.as_deref(), matches!(command, Commands::Play))?;

    let config = load_config(&cli)?;
    let lexicon = load_lexicon(cli.dictionary.as_deref(), &config)?;

    match command {
        Commands::Play => {
            use word_scramble::interactive::{App, run_tui};

            let session = start_session(&cli, lexicon, config)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = start_session(&cli, lexicon, config)?;
            run_simple(&mut session)
        }
        Commands::Check { root, words } => {
            let result = check_words(&root, &words, &lexicon, &config)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Survey { limit, min_words } => {
            let roots = load_roots(cli.roots.as_deref())?;
            let stats = run_survey(&roots, &lexicon, &config, limit, min_words);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so in play mode logs go to a file instead of stderr.
fn init_logging(level: Option<&str>, to_file: bool) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid log filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if to_file {
        let log_file =
            std::fs::File::create("word_scramble.log").context("failed to create log file")?;
        builder
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };
    installed.map_err(|err| anyhow!("log setup failed: {err}"))
}

/// Config file (if any) with command-line overrides applied
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(min_length) = cli.min_length {
        config = config.with_minimum_word_length(min_length);
    }
    if let Some(language) = &cli.language {
        config = config.with_language(language.clone());
    }

    info!(?config, "configuration loaded");
    Ok(config)
}

fn load_lexicon(path: Option<&Path>, config: &GameConfig) -> Result<Lexicon> {
    let words = match path {
        Some(path) => loader::load_from_file(path)?,
        None => loader::words_from_slice(DICTIONARY),
    };
    Ok(Lexicon::with_language(words, config.language.clone()))
}

fn load_roots(path: Option<&Path>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => loader::load_from_file(path)?,
        None => loader::words_from_slice(START_WORDS),
    };
    if words.is_empty() {
        bail!("root word list is empty");
    }
    Ok(words)
}

fn start_session(
    cli: &Cli,
    lexicon: Lexicon,
    config: GameConfig,
) -> Result<GameSession<WordList, Lexicon>> {
    let roots = load_roots(cli.roots.as_deref())?;
    let source = match cli.seed {
        Some(seed) => WordList::seeded(roots, seed),
        None => WordList::new(roots),
    };

    let validator = WordValidator::with_language(lexicon, config.language.clone());
    let mut session = GameSession::new(source, validator, config);
    session
        .start()
        .context("could not start a game: no root word available")?;
    Ok(session)
}
