mod error;
mod server;

use chrono::Utc;
use clap::Parser;
use codedoc_core::{BackendConfig, DocCoordinator, DotnetAnalyzer, OllamaClient, PipelineOptions};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "codedoc-server", version)]
struct Cli {
    /// Address to bind the HTTP API on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    bind: String,

    /// Ollama base URL
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    ollama_url: String,

    /// Ollama model identifier
    #[arg(long, env = "OLLAMA_MODEL", default_value = "llama3")]
    ollama_model: String,

    /// Path to the compiled solution analyzer
    #[arg(
        long,
        env = "ANALYZER_DLL",
        default_value = "analyzer/SolutionAnalyzer/bin/Release/net8.0/SolutionAnalyzer.dll"
    )]
    analyzer_dll: String,

    /// Timeout for analyzer runs and generation backend calls, in seconds
    #[arg(long, default_value = "600")]
    timeout_secs: u64,

    /// Maximum characters packed into one document segment
    #[arg(long, default_value = "1500")]
    chunk_max_chars: usize,

    /// Number of document segments retrieved into the prompt
    #[arg(long, default_value = "8")]
    top_k: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout_secs);

    let backend = BackendConfig {
        base_url: cli.ollama_url.clone(),
        model: cli.ollama_model.clone(),
        timeout,
    };
    let options = PipelineOptions {
        chunk_max_chars: cli.chunk_max_chars,
        retriever_top_k: cli.top_k,
    };

    let generator =
        OllamaClient::new(&backend).map_err(|error| anyhow::anyhow!(error.to_string()))?;
    let coordinator = DocCoordinator::new(generator, options)
        .map_err(|error| anyhow::anyhow!(error.to_string()))?;
    let analyzer = DotnetAnalyzer::new(&cli.analyzer_dll, timeout);

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        backend = %cli.ollama_url,
        model = %cli.ollama_model,
        "codedoc-server boot"
    );

    server::run(&cli.bind, analyzer, coordinator).await
}
