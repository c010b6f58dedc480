//! honeypot-intel CLI: extract scam intelligence from conversation logs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use honeypot_intel::config::ExtractorConfig;
use honeypot_intel::conversation::{ConversationMessage, load_history};
use honeypot_intel::error::IntelError;
use honeypot_intel::intel::{IntelligenceExtractor, IntelligenceRecord};
use honeypot_intel::responder::{
    ConversationStage, DEFAULT_CONTEXT_TURNS, FallbackResponder, ResponseGenerator,
    context_window,
};

#[derive(Parser)]
#[command(name = "honeypot-intel", version, about = "Scam intelligence extraction")]
struct Cli {
    /// Extractor configuration (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract intelligence from a conversation and its latest message.
    Extract {
        /// Latest scammer message.
        #[arg(long)]
        message: String,

        /// Conversation history as a JSON array of {sender, text}; `-` for stdin.
        #[arg(long)]
        history: Option<PathBuf>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Extract intelligence from a single piece of text.
    Scan {
        /// Text to analyse.
        text: String,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Produce an offline persona reply for a turn.
    Reply {
        /// 1-based turn number.
        #[arg(long, default_value = "1")]
        turn: u32,

        /// Latest scammer message.
        #[arg(long, default_value = "")]
        message: String,

        /// Conversation history as a JSON array of {sender, text}.
        #[arg(long)]
        history: Option<PathBuf>,

        /// Also print the context a model backend would receive.
        #[arg(long)]
        show_context: bool,
    },

    /// Print the effective configuration as TOML.
    Config,
}

fn render(record: &IntelligenceRecord, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    };
    rendered
        .map_err(|e| IntelError::Serialization {
            message: e.to_string(),
        })
        .map_err(Into::into)
}

fn history_from(path: Option<PathBuf>) -> Result<Vec<ConversationMessage>> {
    match path {
        Some(p) => Ok(load_history(&p)?),
        None => Ok(Vec::new()),
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ExtractorConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract {
            message,
            history,
            pretty,
        } => {
            let history = history_from(history)?;
            let extractor = IntelligenceExtractor::new(config);
            let record = extractor.extract(&history, &message);
            println!("{}", render(&record, pretty)?);
        }

        Commands::Scan { text, pretty } => {
            let extractor = IntelligenceExtractor::new(config);
            let record = extractor.extract_text(&text);
            println!("{}", render(&record, pretty)?);
        }

        Commands::Reply {
            turn,
            message,
            history,
            show_context,
        } => {
            let history = history_from(history)?;
            let stage = ConversationStage::from_turn(turn);
            if show_context {
                let context = context_window(&history, &message, DEFAULT_CONTEXT_TURNS);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&context).into_diagnostic()?
                );
            }
            let reply = FallbackResponder.respond(&history, &message, turn);
            println!("[{stage}] {reply}");
        }

        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
