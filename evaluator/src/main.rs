use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use futures_util::future::join_all;
use tracing::info;
use tracing_subscriber::EnvFilter;

use image_evaluator::config::EvaluatorConfig;
use image_evaluator::report::{evaluate_path, failed_count, ReportLine};
use image_evaluator::EvaluationClient;

/// Submit image files to the evaluation service and print one JSON line per file.
#[derive(Parser)]
#[command(name = "image-evaluator", version)]
struct Args {
    /// Base url of the evaluation service [default: $EVALUATOR_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,
    /// Mime type sent for files whose type cannot be guessed [default: image/png]
    #[arg(long)]
    default_mime_type: Option<String>,
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

async fn evaluate_file(client: Arc<EvaluationClient>, path: PathBuf) -> Result<ReportLine> {
    let line = evaluate_path(&client, &path).await;
    println!("{}", serde_json::to_string(&line)?);
    Ok(line)
}

fn load_config(args: &Args) -> Result<EvaluatorConfig> {
    let mut config = match &args.base_url {
        Some(base_url) => EvaluatorConfig::new(base_url)?.with_env_overrides(),
        None => EvaluatorConfig::from_env()?,
    };
    if let Some(mime_type) = &args.default_mime_type {
        config = config.with_default_mime_type(mime_type.as_str());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_env("EVALUATOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let config = load_config(&args)?;
    let client = EvaluationClient::new(config)?;
    let tasks = args.files.into_iter()
        .map(|path| evaluate_file(Arc::clone(&client), path));
    let lines = join_all(tasks).await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    let failed = failed_count(&lines);
    if failed > 0 {
        info!("{} of {} evaluations failed", failed, lines.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
