use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quiz_admin::{Config, QuizAdmin, config, logging};

#[derive(Parser, Debug)]
#[command(version, about = "Terminal admin console for quiz questions", long_about = None)]
struct Args {
    /// Base URL of the question store
    #[arg(long, env = "QUIZ_ADMIN_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Ask for confirmation before deleting a question
    #[arg(long, env = "QUIZ_ADMIN_CONFIRM_DELETE")]
    confirm_delete: bool,

    /// File to write logs to
    #[arg(long, env = "QUIZ_ADMIN_LOG_FILE", default_value = config::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "QUIZ_ADMIN_LOG", default_value = config::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::new(&args.base_url, args.confirm_delete)?
        .with_log_file(args.log_file)
        .with_log_level(args.log_level);

    logging::init(&config.log_file, &config.log_level)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    QuizAdmin::new(&config)?.run().await?;
    Ok(())
}
