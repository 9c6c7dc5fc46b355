use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use quiz_author::{Cli, Command, HttpQuestionsApi, QuestionListController, headless, tui};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    let command = cli.command();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if command == Command::Tui {
        // The terminal belongs to the UI, so logs go to a file.
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.log_file)
            .with_context(|| format!("failed to open log file {}", settings.log_file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(log_file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let api = HttpQuestionsApi::new(settings.api_base.clone(), settings.timeout)?;
    tracing::info!(api = %api.base(), "starting");
    let controller = QuestionListController::new(api);

    let mut out = io::stdout();
    match command {
        Command::Tui => tui::run(controller).await?,
        Command::List => headless::list(&controller, &mut out).await?,
        Command::Add {
            prompt,
            answer1,
            answer2,
            correct,
        } => headless::add(&controller, prompt, answer1, answer2, correct, &mut out).await?,
        Command::Delete { id } => headless::delete(&controller, &id, &mut out).await?,
    }

    Ok(())
}
