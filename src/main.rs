use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use substack_dashboard::application::ports::time::Clock;
use substack_dashboard::application::report::ReportService;
use substack_dashboard::config::AppConfig;
use substack_dashboard::domain::article::ArticleRepository;
use substack_dashboard::infrastructure::{
    database, repositories::MySqlArticleRepository, time::SystemClock,
};
use substack_dashboard::presentation::http::{routes::build_router, state::HttpState};
use substack_dashboard::presentation::views::PageConfig;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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

    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(MySqlArticleRepository::new(pool, config.article_table()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let state = HttpState {
        reports: Arc::new(ReportService::new(article_repo, clock)),
        page: Arc::new(PageConfig {
            title: config.page_title().to_string(),
            logo_url: config.page_logo_url().to_string(),
        }),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
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
