mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use org_config::{
    ConfigResolver, CssVariables, HttpConfigStore, OrgConfigService, RemoteModuleRouter,
};

use crate::config::AppConfig;

/// Portal Server - organization configuration API for the multi-tenant portal
#[derive(Parser)]
#[command(name = "portal-server")]
#[command(about = "Portal Server - organization configuration API for the multi-tenant portal")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Resolve an organization config through the API and print it
    Resolve {
        /// Organization id (defaults to resolver.default_org_id)
        #[arg(long)]
        org: Option<String>,

        /// Navigation path whose remote module should be printed
        #[arg(long)]
        path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*, ORG_ID, API_URL) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    portal_bootstrap::init_logging(&config.logging, cli.verbose)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
        Commands::Resolve { org, path } => resolve_once(&config, org.as_deref(), path.as_deref()).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let store = org_config::build_store(&config.store);
    let service = Arc::new(OrgConfigService::new(store));
    let router = org_config::api::rest::router(service, &config.cors);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "Portal server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(portal_bootstrap::shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Portal server stopped");
    Ok(())
}

async fn resolve_once(config: &AppConfig, org: Option<&str>, path: Option<&str>) -> Result<()> {
    let store = HttpConfigStore::new(&config.resolver.api_url)
        .with_context(|| format!("invalid resolver.api_url {}", config.resolver.api_url))?;
    let resolver = Arc::new(ConfigResolver::new(Arc::new(store), &config.resolver));

    let vars = CssVariables::new();
    let resolution = resolver.resolve_and_apply(org, &vars).await;

    let mut output = serde_json::json!({
        "source": resolution.source.as_str(),
        "config": &*resolution.config,
        "themeVariables": vars.snapshot(),
    });

    if let Some(path) = path {
        let router = RemoteModuleRouter::new(Arc::clone(&resolver));
        let module = router.remote_module_for_path(path).await;
        output["remoteModule"] = serde_json::to_value(module)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
