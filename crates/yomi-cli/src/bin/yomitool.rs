use std::fs;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use yomi_cli::commands::conjugate_ops::{Layout, OutputFormat};
use yomi_cli::commands::{config_ops, conjugate_ops, text_ops};
use yomi_core::lexicon::Lexicon;

#[derive(Parser)]
#[command(name = "yomitool", about = "Japanese study-sentence normalization diagnostics")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom lexicon TOML (see `lexicon-export`)
    #[arg(long, global = true)]
    lexicon: Option<String>,
    /// Log pipeline stages to stderr (-vv for per-rule events)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the text a speech synthesizer should read
    Speak {
        /// Annotated text, e.g. 修正【しゅうせい】します
        text: String,
    },
    /// Print the on-screen form (furigana kept, inserted pauses removed)
    Display { text: String },
    /// Insert pacing marks, or remove them with --remove
    Pauses {
        text: String,
        #[arg(long)]
        remove: bool,
    },
    /// Lint furigana annotations
    Check { text: String },
    /// Classify a word and print its conjugation table
    Conjugate {
        word: String,
        /// MeCab feature string for the word (optional)
        #[arg(long)]
        features: Option<String>,
        /// Dictionary layout of --features
        #[arg(long, value_enum, default_value = "unidic")]
        layout: Layout,
        /// Output as JSON instead of text
        #[arg(long, conflicts_with = "html")]
        json: bool,
        /// Output the card HTML block
        #[arg(long)]
        html: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
    /// Print the default lexicon TOML
    LexiconExport,
    /// Validate a lexicon TOML file
    LexiconValidate { file: String },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "yomi_core=debug,yomitool=debug",
        _ => "yomi_core=trace,yomitool=debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn load_custom(cli: &Cli) {
    if let Some(path) = &cli.settings {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading {path}: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = yomi_core::settings::init_custom(content) {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
        debug!(path = path.as_str(), "custom settings");
    }
    if let Some(path) = &cli.lexicon {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading {path}: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = Lexicon::init_custom(content) {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
        debug!(path = path.as_str(), "custom lexicon");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    load_custom(&cli);

    match cli.command {
        Command::Speak { text } => text_ops::speak(&text),
        Command::Display { text } => text_ops::display(&text),
        Command::Pauses { text, remove } => text_ops::pauses(&text, remove),
        Command::Check { text } => text_ops::check(&text),
        Command::Conjugate {
            word,
            features,
            layout,
            json,
            html,
        } => {
            let format = if json {
                OutputFormat::Json
            } else if html {
                OutputFormat::Html
            } else {
                OutputFormat::Text
            };
            conjugate_ops::conjugate(&word, features.as_deref(), layout, format);
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::LexiconExport => config_ops::lexicon_export(),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
    }
}
