use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use eyre::WrapErr;

const DEFAULT_ADDR: &str = "127.0.0.1:4000";
const DEFAULT_DATABASE_URL: &str = "sqlite://snippetbox.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_UI_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/ui");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Startup settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Holds `html/pages`, `html/partials` and `static`.
    pub ui_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let addr = lookup("SNIPPETBOX_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .wrap_err_with(|| format!("invalid SNIPPETBOX_ADDR: {addr}"))?;

        let database_url = lookup("SNIPPETBOX_DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let db_max_connections = match lookup("SNIPPETBOX_DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .wrap_err_with(|| format!("invalid SNIPPETBOX_DB_MAX_CONNECTIONS: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let ui_dir = PathBuf::from(
            lookup("SNIPPETBOX_UI_DIR").unwrap_or_else(|| DEFAULT_UI_DIR.to_string()),
        );

        let log_format = match lookup("SNIPPETBOX_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid SNIPPETBOX_LOG_FORMAT: {other} (expected text or json)"
                ));
            }
        };

        Ok(Self {
            addr,
            database_url,
            db_max_connections,
            ui_dir,
            log_format,
        })
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.ui_dir.join("html").join("pages")
    }

    pub fn partials_dir(&self) -> PathBuf {
        self.ui_dir.join("html").join("partials")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.ui_dir.join("static")
    }
}
