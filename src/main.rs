use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userhub::application::{
    ports::{chat::ChatCompletionGateway, security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use userhub::config::AppConfig;
use userhub::domain::user::UserRepository;
use userhub::infrastructure::{
    chat::{OpenAiChatGateway, XaiChatGateway},
    database,
    repositories::PostgresUserRepository,
    security::Argon2PasswordHasher,
    time::SystemClock,
};
use userhub::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let http_client = reqwest::Client::new();
    let openai = config.openai();
    let openai_gateway: Arc<dyn ChatCompletionGateway> = Arc::new(OpenAiChatGateway::new(
        http_client.clone(),
        openai.base_url.clone(),
        openai.api_key.clone(),
        openai.model.clone(),
    ));
    let xai = config.xai();
    let xai_gateway: Arc<dyn ChatCompletionGateway> = Arc::new(XaiChatGateway::new(
        http_client,
        xai.base_url.clone(),
        xai.api_key.clone(),
        xai.model.clone(),
    ));

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        password_hasher,
        clock,
        openai_gateway,
        xai_gateway,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
