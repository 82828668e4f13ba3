// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{Level, error, info, warn};

use essay_assist::api::http_router;
use essay_assist::config::AppConfig;
use essay_assist::prompt::preview_prompt;
use essay_assist::state::AppState;

#[derive(Parser)]
#[command(name = "essay-assist")]
#[command(about = "Writing assistant: builds essay prompts and relays them to a completion provider")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overrides LOG_LEVEL)
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Print the prompt that would be sent, without calling the provider
    Render {
        /// Topic label, e.g. "IELTS Writing", "IELTS Speaking", "Debate"
        #[arg(short, long, default_value = "IELTS Writing")]
        topic: String,

        /// Action identifier, e.g. outline, paraphrase, synonyms
        #[arg(short, long)]
        action: String,

        #[arg(short, long, default_value = "")]
        question: String,

        #[arg(short, long, default_value = "")]
        content: String,
    },
}

/// Graceful shutdown on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

async fn run_server(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Starting essay-assist v{}", env!("CARGO_PKG_VERSION"));
    info!("Model: {} (max_tokens={})", config.model, config.max_tokens);
    if config.provider_configured() {
        info!("Completion provider: {}", config.openai_base_url);
    } else {
        warn!("OPENAI_API_KEY not set; every prompt request will fail with 500");
    }

    let app_state = Arc::new(AppState::from_config(&config));
    let app = http_router(app_state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("HTTP server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let level = if cli.debug { Level::DEBUG } else { config.tracing_level() };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => run_server(config, host, port).await,
        Commands::Render {
            topic,
            action,
            question,
            content,
        } => {
            let prompt = preview_prompt(&topic, &action, &question, &content)?;
            println!("{}", prompt);
            Ok(())
        }
    }
}
