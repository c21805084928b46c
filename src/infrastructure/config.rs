use crate::infrastructure::favicon::DEFAULT_FAVICON_SERVICE;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub favicon: FaviconSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    pub seed_defaults: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FaviconSettings {
    pub service_url: String,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Load configuration from defaults, `config/dashboard.*` (optional),
/// `DASHBOARD__SECTION__KEY` environment variables and the plain `PORT` variable
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let port = std::env::var("PORT").ok().filter(|p| !p.trim().is_empty());
    build_config(
        config::File::with_name("config/dashboard").required(false),
        config::Environment::with_prefix("DASHBOARD").separator("__"),
        port,
    )
}

fn build_config<F, E>(file: F, env: E, port: Option<String>) -> anyhow::Result<DashboardConfig>
where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.path", "./data/dashboard.db")?
        .set_default("database.seed_defaults", true)?
        .set_default("favicon.service_url", DEFAULT_FAVICON_SERVICE)?
        .add_source(file)
        .add_source(env)
        .set_override_option("server.port", port)?
        .build()?;

    Ok(settings.try_deserialize()?)
}
