use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bizdesk::db::IntakeStorage;
use bizdesk::mail::{HttpMailTransport, NotificationDispatcher};
use bizdesk::{Config, DeskState, desk_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        mail_relay = %cfg.mail_relay_url,
        sender = %cfg.smtp_user,
        recipient = %cfg.receiver_email,
        loglevel = %cfg.loglevel
    );

    let storage = IntakeStorage::connect(&cfg.database_url).await?;

    if cfg.mail_secret().is_empty() {
        warn!("SMTP_PASS is not set; the mail relay will reject notifications");
    }
    let transport = HttpMailTransport::from_config(&cfg)?;
    let dispatcher = NotificationDispatcher::from_config(&cfg, Arc::new(transport));
    dispatcher.verify().await;

    let state = DeskState::new(storage, dispatcher);
    let app = desk_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
