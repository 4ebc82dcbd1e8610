use anyhow::Result;
use clap::Parser;
use regex_tutor::{config, llm, tui, PatternAssistant, SubmitOutcome};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "regex-tutor")]
#[command(about = "Describe a text pattern, get a regex with an explanation")]
#[command(version)]
struct Args {
    /// Generate once for this description, print the result and exit
    #[arg(long, value_name = "DESCRIPTION")]
    print: Option<String>,

    /// Show the prompt that would be sent for this description
    #[arg(long, value_name = "DESCRIPTION", conflicts_with = "print")]
    show_prompt: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let interactive = args.print.is_none() && args.show_prompt.is_none();

    init_logging(interactive)?;

    if let Some(description) = &args.show_prompt {
        println!("{}", llm::prompt::regex_tutor_prompt(description));
        return Ok(());
    }

    // Credentials may live in a local .env file
    if dotenvy::dotenv().is_ok() {
        tracing::debug!("Loaded .env file");
    }

    // Load configuration
    let config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };

    let generator = llm::create_client(&config)?;
    let mut assistant = PatternAssistant::new(generator);

    if let Some(description) = &args.print {
        match assistant.submit(description).await {
            SubmitOutcome::Generated(entry) => {
                println!("Generated Regex\n{}\n", entry.regex);
                println!("Explanation\n{}", entry.explanation);
            }
            SubmitOutcome::Warning(message) | SubmitOutcome::Failed(message) => {
                eprintln!("{}", message);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    tui::run_app(&config, &mut assistant).await
}

/// Log to a file while the TUI owns the terminal, to stderr otherwise
fn init_logging(interactive: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "regex_tutor=info".into());

    if interactive {
        if let Some(path) = log_file_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn log_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "regex-tutor")
        .map(|dirs| dirs.data_dir().join("regex-tutor.log"))
}
