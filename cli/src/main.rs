mod commands;
mod config;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dotenv::dotenv;
use formguard::FormKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status for a record that failed validation
const EXIT_REJECTED: i32 = 1;
/// Exit status for unreadable input or bad arguments
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "formguard")]
#[command(about = "Validate booking site form submissions and escape user text", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format: text, json or pretty
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record against a form's rules
    Validate {
        /// Form kind (contact, booking, payment-card, upi-payment, promo-code)
        #[arg(long, short)]
        form: FormKind,

        /// Path to the JSON record, or - for stdin
        #[arg(long, short)]
        input: Option<String>,

        /// Date to treat as today (YYYY-MM-DD) for the check-in floor
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Escape text for safe embedding in HTML
    EscapeHtml {
        text: String,
    },

    /// Percent-encode text for use as a URL component
    EscapeUrl {
        text: String,
    },

    /// List the known forms and their fields
    Forms,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "formguard=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Validate { form, input, today } => {
            let format = config::resolve_format(cli.format)?;
            let accepted = commands::validate(form, input.as_deref(), today, format)?;
            Ok(if accepted { 0 } else { EXIT_REJECTED })
        }
        Commands::EscapeHtml { text } => {
            commands::escape_html(&text);
            Ok(0)
        }
        Commands::EscapeUrl { text } => {
            commands::escape_url(&text);
            Ok(0)
        }
        Commands::Forms => {
            commands::list_forms();
            Ok(0)
        }
    }
}
