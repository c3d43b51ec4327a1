use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;
use trieseek::index::stats::write_stats;
use trieseek::{output, EngineConfig, SearchEngine, SourceFiles};

#[derive(Parser)]
#[command(name = "trieseek")]
#[command(about = "Phrase, boolean and section search over a single document")]
struct Cli {
    /// Document to index, one row per line
    #[arg(short, long)]
    words: PathBuf,

    /// Stop-words file, one word per line
    #[arg(short, long)]
    stop_words: Option<PathBuf>,

    /// Section index file, `title,startLine` per line
    #[arg(short, long)]
    index: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Find every occurrence of a phrase
    Phrase {
        /// Phrase to search for
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
    /// Count occurrences of a word
    Count { word: String },
    /// List every word starting with a prefix
    Prefix { prefix: String },
    /// Lines containing all of the words
    And {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Lines containing any of the words
    Or {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Lines containing all of the words and none of the excluded ones
    Not {
        #[arg(required = true)]
        words: Vec<String>,
        /// Words that must not be on the line
        #[arg(short = 'x', long = "exclude", required = true)]
        exclude: Vec<String>,
    },
    /// Occurrences inside sections containing all of the words
    SectionsAnd {
        #[arg(required = true)]
        words: Vec<String>,
        /// Section titles to search (whole document when omitted)
        #[arg(long = "section")]
        sections: Vec<String>,
    },
    /// Occurrences of any of the words inside sections
    SectionsOr {
        #[arg(required = true)]
        words: Vec<String>,
        #[arg(long = "section")]
        sections: Vec<String>,
    },
    /// Section AND search skipping sections with excluded words
    SectionsNot {
        #[arg(required = true)]
        words: Vec<String>,
        #[arg(long = "section")]
        sections: Vec<String>,
        #[arg(short = 'x', long = "exclude", required = true)]
        exclude: Vec<String>,
    },
    /// Sections containing all of the words and at least one of `--any`
    Compound {
        #[arg(required = true)]
        words: Vec<String>,
        #[arg(long = "section")]
        sections: Vec<String>,
        /// Optional words, at least one must be in the section
        #[arg(long = "any", required = true)]
        any: Vec<String>,
    },
    /// Show index statistics
    Stats,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, value)?;
    writeln!(lock)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };

    let sources = SourceFiles {
        words: cli.words.clone(),
        stop_words: cli.stop_words.clone(),
        index: cli.index.clone(),
    };
    let engine = SearchEngine::open_with_config(&sources, config)
        .with_context(|| format!("Failed to index {}", cli.words.display()))?;

    let mut stdout = StandardStream::stdout(cli.color.into());
    let index = engine.index();

    match cli.command {
        Commands::Phrase { phrase } => {
            let found = engine.phrase_occurrences(&phrase.join(" "));
            if cli.json {
                print_json(&found)?;
            } else {
                output::print_occurrences(&mut stdout, index, &found)?;
            }
        }
        Commands::Count { word } => {
            let count = engine.word_frequency(&word);
            if cli.json {
                print_json(&serde_json::json!({ "word": word, "count": count }))?;
            } else {
                output::print_count(&mut stdout, &word, count)?;
            }
        }
        Commands::Prefix { prefix } => {
            let found = engine.prefix_occurrences(&prefix);
            if cli.json {
                print_json(&found)?;
            } else {
                output::print_occurrences(&mut stdout, index, &found)?;
            }
        }
        Commands::And { words } => {
            let rows = engine.lines_containing_all(&words);
            emit_rows(&mut stdout, &engine, &rows, cli.json)?;
        }
        Commands::Or { words } => {
            let rows = engine.lines_containing_any(&words);
            emit_rows(&mut stdout, &engine, &rows, cli.json)?;
        }
        Commands::Not { words, exclude } => {
            let rows = engine.lines_containing_all_excluding(&words, &exclude);
            emit_rows(&mut stdout, &engine, &rows, cli.json)?;
        }
        Commands::SectionsAnd { words, sections } => {
            let hits = engine.sections_containing_all(&words, &sections);
            emit_hits(&mut stdout, &engine, &hits, cli.json)?;
        }
        Commands::SectionsOr { words, sections } => {
            let hits = engine.sections_containing_any(&words, &sections);
            emit_hits(&mut stdout, &engine, &hits, cli.json)?;
        }
        Commands::SectionsNot {
            words,
            sections,
            exclude,
        } => {
            let hits = engine.sections_containing_all_excluding(&words, &sections, &exclude);
            emit_hits(&mut stdout, &engine, &hits, cli.json)?;
        }
        Commands::Compound {
            words,
            sections,
            any,
        } => {
            let hits = engine.sections_compound(&words, &sections, &any);
            emit_hits(&mut stdout, &engine, &hits, cli.json)?;
        }
        Commands::Stats => {
            if cli.json {
                print_json(&engine.stats())?;
            } else {
                write_stats(&mut stdout, index)?;
            }
        }
    }

    Ok(())
}

fn emit_rows(
    stdout: &mut StandardStream,
    engine: &SearchEngine,
    rows: &[u32],
    json: bool,
) -> Result<()> {
    if json {
        print_json(&rows)
    } else {
        output::print_rows(stdout, engine.index(), rows)?;
        Ok(())
    }
}

fn emit_hits(
    stdout: &mut StandardStream,
    engine: &SearchEngine,
    hits: &[trieseek::Hit],
    json: bool,
) -> Result<()> {
    if json {
        print_json(&hits)
    } else {
        output::print_hits(stdout, engine.index(), hits)?;
        Ok(())
    }
}
