//! Song Searcher - Main entrypoint.
//!
//! Loads configuration, initializes logging, indexes the song catalog and
//! answers title-prefix queries from the command line or an interactive
//! prompt.

use clap::{Parser, Subcommand};
use song_searcher_lib::config::{ConfigLoader, ConfigResult, LogConfig, SearcherConfig, ENV_PREFIX};
use song_searcher_lib::error::{
    set_error_reporter, SearcherError, SearcherResult, TracingErrorReporter,
};
use song_searcher_lib::{SearchOutcome, SongSearcher};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Song Searcher.
#[derive(Parser, Debug)]
#[clap(name = "Song Searcher", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Catalog file to index, overriding the configured path
    #[clap(long, value_parser)]
    catalog: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for song names until end of input
    Interactive,

    /// Run a single query and print the matches
    Search {
        /// Title prefix to look up; several words are joined with spaces
        query: Vec<String>,

        /// Print matching records as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// stdout carries only results.
fn init_logging(log: &LogConfig) -> SearcherResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        SearcherError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Writes the shaped answer to a query as numbered rows.
fn print_outcome<W: Write>(
    out: &mut W,
    query: &str,
    outcome: &SearchOutcome<'_>,
) -> io::Result<()> {
    writeln!(out, "Songs like: {query}")?;
    if outcome.is_empty() {
        for line in outcome.lines() {
            writeln!(out, "{line}")?;
        }
    } else {
        for (i, line) in outcome.lines().iter().enumerate() {
            writeln!(out, "{}. {line}", i + 1)?;
        }
    }
    Ok(())
}

/// Reads one query per line from stdin until end of input.
fn run_interactive(searcher: &SongSearcher) -> SearcherResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    writeln!(out, "SONG SEARCH")?;
    loop {
        write!(out, "Enter the song name: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let query = line.trim_end_matches(&['\r', '\n'][..]);
        print_outcome(&mut out, query, &searcher.top_matches(query))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Runs a single query.
fn run_search(searcher: &SongSearcher, query: &str, json: bool) -> SearcherResult<()> {
    let outcome = searcher.top_matches(query);
    let mut out = io::stdout().lock();
    if json {
        let rendered = serde_json::to_string_pretty(outcome.records())?;
        writeln!(out, "{rendered}")?;
    } else {
        print_outcome(&mut out, query, &outcome)?;
    }
    Ok(())
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> SearcherResult<()> {
    info!("Generating default configuration");
    let default_config = SearcherConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| SearcherError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Resolves the final configuration and indexes the catalog.
///
/// Exits the process when the configuration could not be loaded.
fn build_searcher(loaded: ConfigResult<SearcherConfig>, catalog: Option<PathBuf>) -> SongSearcher {
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    if let Some(path) = catalog {
        config.catalog.path = path;
    }

    info!(catalog = %config.catalog.path.display(), "Indexing song catalog");
    SongSearcher::from_config(&config)
}

/// Main entry point for the application.
fn main() -> SearcherResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    // Configure logging from the file when it loaded, defaults otherwise.
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let searcher = build_searcher(loaded, args.catalog);
            run_interactive(&searcher)
        }
        Command::Search { query, json } => {
            let searcher = build_searcher(loaded, args.catalog);
            run_search(&searcher, &query.join(" "), json)
        }
        Command::Validate => {
            info!("Validating configuration");
            match loaded {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}
