use std::path::PathBuf;
use std::time::Duration as StdDuration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todolists::{
    api,
    config::{session_ttl_from_secs, AppConfig, Environment, MAX_SESSION_TTL_SECS},
    db::SessionStore,
};

/// How often idle sessions are swept.
const PRUNE_INTERVAL: StdDuration = StdDuration::from_secs(300);

#[derive(Parser)]
#[command(name = "todolists")]
#[command(about = "Session-backed todo list manager")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (overrides TODOS_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides TODOS_HOST)
        #[arg(long)]
        host: Option<String>,

        /// SQLite file for session storage (overrides TODOS_SESSION_DB)
        #[arg(long)]
        session_db: Option<PathBuf>,
    },
    /// Remove idle sessions from a session database file
    PruneSessions {
        /// SQLite file holding the sessions
        #[arg(long)]
        session_db: PathBuf,

        /// Remove sessions idle for longer than this many seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_SESSION_TTL_SECS))]
        older_than_secs: Option<u64>,
    },
}

fn init_tracing(environment: Environment) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| environment.default_log_filter().into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn open_store(config: &AppConfig) -> anyhow::Result<SessionStore> {
    let store = match &config.session_db {
        Some(path) => SessionStore::open(path.clone())
            .with_context(|| format!("Failed to open session database {}", path.display()))?,
        None => SessionStore::open_memory()?,
    };
    store.migrate()?;
    Ok(store)
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let store = open_store(&config)?;

    let pruner = store.clone();
    let ttl = config.session_ttl;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            match pruner.prune_idle(ttl) {
                Ok(0) => {}
                Ok(n) => tracing::info!("Pruned {} idle sessions", n),
                Err(e) => tracing::error!("Session pruning failed: {:#}", e),
            }
        }
    });

    let addr = config.bind_addr();
    tracing::info!(
        "Starting todolists ({:?}) with {} session store",
        config.environment,
        if config.session_db.is_some() { "file" } else { "in-memory" }
    );

    let app = api::create_router(store, config);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("todolists listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Tracing goes up first so config parsing can report rejected values.
    init_tracing(Environment::from_env());
    let mut config = AppConfig::from_env();

    match cli.command {
        Some(Commands::Serve {
            port,
            host,
            session_db,
        }) => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if session_db.is_some() {
                config.session_db = session_db;
            }
            serve(config).await?;
        }
        Some(Commands::PruneSessions {
            session_db,
            older_than_secs,
        }) => {
            let ttl = older_than_secs
                .and_then(session_ttl_from_secs)
                .unwrap_or(config.session_ttl);
            config.session_db = Some(session_db);
            let store = open_store(&config)?;
            let removed = store.prune_idle(ttl)?;
            println!("Removed {} idle sessions ({} remaining)", removed, store.count()?);
        }
        None => serve(config).await?,
    }

    Ok(())
}
