use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tiergate::config::Config;
use tiergate::handlers;
use tiergate::state::AppState;
use tiergate::store::CredentialStore;

/// Tiered content access behind role-based bearer tokens.
#[derive(Debug, Parser)]
#[command(name = "tiergate", version)]
struct Cli {
    /// Bind address, overrides HOST
    #[arg(long)]
    host: Option<String>,
    /// Bind port, overrides PORT
    #[arg(long)]
    port: Option<u16>,
    /// Users file path, overrides USERS_PATH
    #[arg(long)]
    users: Option<String>,
}

fn load_store(config: &Config) -> anyhow::Result<CredentialStore> {
    let path = Path::new(&config.users_path);
    let store = if path.exists() {
        CredentialStore::load(path)
            .with_context(|| format!("loading users from {}", config.users_path))?
    } else if config.dev_mode {
        tracing::warn!(
            path = %config.users_path,
            "users file not found, seeding demo users (dev mode)"
        );
        CredentialStore::demo()
    } else {
        bail!("users file not found: {}", config.users_path);
    };

    if store.is_empty() {
        bail!("credential store is empty, refusing to start");
    }
    Ok(store)
}

fn signing_secret(config: &Config) -> anyhow::Result<Vec<u8>> {
    match &config.signing_key {
        Some(key) => {
            if key.len() < 32 {
                tracing::warn!("SIGNING_KEY is shorter than recommended (32 bytes)");
            }
            Ok(key.as_bytes().to_vec())
        }
        None if config.dev_mode => {
            use jwt_simple::prelude::*;
            tracing::warn!(
                "SIGNING_KEY not set, using an ephemeral key (dev mode); \
                 tokens will not survive a restart"
            );
            Ok(HS256Key::generate().to_bytes())
        }
        None => bail!("SIGNING_KEY is not set"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tiergate=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(users) = cli.users {
        config.users_path = users;
    }

    let store = load_store(&config)?;
    let secret = signing_secret(&config)?;
    tracing::info!(users = store.len(), ttl_secs = config.token_ttl_secs, "configured");

    let state = AppState::new(store, &secret, config.token_ttl_secs);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(1)
            .burst_size(60)
            .finish()
            .context("invalid rate limit configuration")?,
    );
    let governor_limiter = governor_conf.limiter().clone();
    std::thread::spawn(move || {
        loop {
            std::thread::sleep(Duration::from_secs(60));
            governor_limiter.retain_recent();
        }
    });

    let app = handlers::router(state)
        .layer(GovernorLayer::new(governor_conf))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
