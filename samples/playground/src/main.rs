use linkline_playground::config::AppConfig;
use linkline_playground::routes::create_router;
use linkline_playground::server::Server;
use linkline_playground::session::InMemorySessionStore;
use linkline_playground::state::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    init_tracing();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let config = AppConfig::from_env()?;
    tracing::info!(
        address = %config.server.socket_addr(),
        cookie = %config.session.cookie_name,
        ttl_seconds = config.session.time_to_live.as_secs(),
        capacity = config.session.capacity,
        "Starting linked structures playground"
    );

    let store = InMemorySessionStore::from_config(&config.session);
    let state = AppState::new(store, config.session);
    let router = create_router(state);

    Server::new(config.server).run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("linkline_playground=debug,tower_http=debug,info")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}
