//! Apply or inspect the SCMS schema.
//!
//! Usage: `scms-migrate [up|down|fresh|status]` (default `up`).
//! The database comes from `config.toml` / `$CONFIG_PATH`, or `DATABASE_URL`.

use anyhow::anyhow;
use migration::{Migrator, MigratorTrait};
use tracing::{debug, error, info};

use common::utils::logging::{init_logging, LogFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Up,
    Down,
    Fresh,
    Status,
}

impl Command {
    fn parse(arg: Option<&str>) -> anyhow::Result<Self> {
        match arg.unwrap_or("up") {
            "up" => Ok(Command::Up),
            "down" => Ok(Command::Down),
            "fresh" => Ok(Command::Fresh),
            "status" => Ok(Command::Status),
            other => Err(anyhow!("unknown command `{other}`; expected up, down, fresh or status")),
        }
    }
}

async fn run(cmd: Command, cfg: &configs::AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    match cmd {
        Command::Up => Migrator::up(&db, None).await?,
        // one step back, like `sea-orm-cli migrate down`
        Command::Down => Migrator::down(&db, Some(1)).await?,
        Command::Fresh => Migrator::fresh(&db).await?,
        Command::Status => Migrator::status(&db).await?,
    }
    info!(command = ?cmd, "migration command finished");
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let dotenv = common::env::load_dotenv();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    init_logging(LogFormat::parse(&cfg.logging.format), cfg.logging.filter.as_deref());
    if let Some(path) = &dotenv {
        debug!(path = %path.display(), "loaded .env");
    }

    let arg = std::env::args().nth(1);
    let cmd = match Command::parse(arg.as_deref()) {
        Ok(cmd) => cmd,
        Err(e) => {
            error!(error = %e, "bad arguments");
            return std::process::ExitCode::FAILURE;
        }
    };

    match run(cmd, &cfg).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(command = ?cmd, error = %e, "migration failed");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(None).unwrap(), Command::Up);
        assert_eq!(Command::parse(Some("down")).unwrap(), Command::Down);
        assert_eq!(Command::parse(Some("fresh")).unwrap(), Command::Fresh);
        assert_eq!(Command::parse(Some("status")).unwrap(), Command::Status);
        assert!(Command::parse(Some("sideways")).is_err());
    }

    #[tokio::test]
    async fn up_applies_on_sqlite() {
        let mut cfg = configs::AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        cfg.database.max_connections = 1;
        cfg.database.min_connections = 1;
        run(Command::Up, &cfg).await.unwrap();
    }
}
