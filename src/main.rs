//! todokit - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use todokit::{
    cli::{Args, Commands},
    config::Config,
    gateway::{RpcServer, StoreClient, TodoTools, ToolRegistry, ToolRuntime},
    logging,
    store::{self, TodoStore},
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbosity());

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match args.command.clone() {
        Commands::Serve { host, port } => run_serve(config, host, port).await,
        Commands::Gateway { base_url } => run_gateway(config, base_url).await,
        Commands::Call {
            tool,
            args: raw_args,
            base_url,
        } => run_call(config, &tool, raw_args.as_deref(), base_url).await,
        Commands::Tools => {
            show_tools();
            Ok(())
        }
        Commands::Doctor { base_url } => run_doctor(config, base_url).await,
        Commands::Config => show_config(&args, &config),
    }
}

/// Run the store service until Ctrl-C
async fn run_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.store.host = host;
    }
    if let Some(port) = port {
        config.store.port = port;
    }

    let addr = config.store.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    store::serve(listener, TodoStore::new(), shutdown_signal())
        .await
        .context("Store service failure")?;
    Ok(())
}

/// Serve tools over stdio until stdin closes
async fn run_gateway(config: Config, base_url: Option<String>) -> Result<()> {
    let runtime = build_runtime(&config, base_url)?;
    info!(base_url = %runtime.tools().api().base_url(), "starting tool gateway");

    RpcServer::new(runtime)
        .serve_stdio()
        .await
        .context("Tool gateway failure")?;
    Ok(())
}

/// Invoke one tool and print its output
async fn run_call(
    config: Config,
    tool: &str,
    raw_args: Option<&str>,
    base_url: Option<String>,
) -> Result<()> {
    let runtime = build_runtime(&config, base_url)?;

    let tool_args: Value = match raw_args {
        Some(raw) => serde_json::from_str(raw).context("Tool arguments must be valid JSON")?,
        None => Value::Null,
    };

    let result = runtime.execute(tool, &tool_args).await?;
    println!("{}", serde_json::to_string_pretty(&result.output)?);

    if let Some(err) = &result.error {
        error!(tool, error = %err, "tool reported an error");
    }
    Ok(())
}

async fn run_doctor(config: Config, base_url: Option<String>) -> Result<()> {
    let runtime = build_runtime(&config, base_url)?;
    let client = runtime.tools().api();

    println!("{}", "todokit doctor".bold());
    println!("  store service: {}", client.base_url());

    if client.health().await? {
        println!("  {} store service reachable", "✓".green());
    } else {
        println!("  {} store service not reachable", "✗".red());
        println!("    start it with: todokit serve");
    }
    Ok(())
}

fn show_tools() {
    let registry = ToolRegistry::new();
    println!("{}", "Available tools".bold());
    for schema in registry.schemas() {
        let mode = if schema.read_only { "read" } else { "write" };
        println!("  {} [{}]", schema.name.cyan(), mode);
        println!("      {}", schema.description);
    }
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    println!("{}", "todokit configuration".bold());
    println!("  file:      {}", path.display());
    println!("  verbosity: {}", args.verbosity().as_str());
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn build_runtime(config: &Config, base_url: Option<String>) -> Result<ToolRuntime> {
    let base_url = base_url.unwrap_or_else(|| config.gateway.base_url.clone());
    let client = StoreClient::with_config(&base_url, config.gateway.timeout())?;
    let tools = TodoTools::new(client).with_policy(config.gateway.overdue_policy());
    Ok(ToolRuntime::new(tools))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
