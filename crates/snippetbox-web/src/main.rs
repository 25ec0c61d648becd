use eyre::WrapErr;
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use snippetbox_render::cache::TemplateCache;
use snippetbox_storage::snippets::SnippetStore;
use snippetbox_storage::{pool, schema};
use snippetbox_web::config::{Config, LogFormat};
use snippetbox_web::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let db = pool::connect(&config.database_url, config.db_max_connections)
        .await
        .wrap_err("failed to open database")?;
    schema::ensure_schema(&db).await?;

    let templates = TemplateCache::load(config.pages_dir(), config.partials_dir())
        .wrap_err("failed to build template cache")?;
    tracing::info!(pages = ?templates.names(), "template cache loaded");

    let state = AppState::new(SnippetStore::new(db.clone()), templates);
    let app = snippetbox_web::app(state, config.static_dir());

    let listener = TcpListener::bind(config.addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, "server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("server stopped");
    Ok(())
}

/// Info and below go to stdout, warnings and errors to stderr.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
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
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
