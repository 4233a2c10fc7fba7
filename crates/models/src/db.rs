use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Build pool options from a validated [`DatabaseConfig`].
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database connected");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 7,
            min_connections: 1,
            acquire_timeout_secs: 5,
            ..DatabaseConfig::default()
        };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_url(), "sqlite::memory:");
        assert_eq!(opt.get_max_connections(), Some(7));
        assert_eq!(opt.get_min_connections(), Some(1));
        assert_eq!(opt.get_acquire_timeout(), Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn connects_to_sqlite_memory() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 1, min_connections: 1, ..DatabaseConfig::default() };
        let db = connect_with_config(&cfg).await?;
        db.ping().await?;
        Ok(())
    }
}
