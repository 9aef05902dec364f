//! `devcfg-loader` -- loads tracked interfaces from a device configuration
//! export into `device_configuration`.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                      | Description                 |
//! |----------------------|----------|------------------------------|-----------------------------|
//! | `DEVICE_CONFIG_PATH` | no       | `./data/configClear_v2.json` | Interface document to load  |
//! | `PG_DATABASE`        | no       | libpq fallback               | Database name               |
//! | `PG_USER`            | no       | libpq fallback               | Database user               |
//! | `PG_PASSWORD`        | no       | libpq fallback               | Database password           |
//! | `PG_HOST`            | no       | libpq fallback               | Database host               |
//! | `PG_PORT`            | no       | libpq fallback               | Database port               |
//!
//! An unset `PG_*` variable falls back to the matching libpq variable
//! (`PGDATABASE`, `PGUSER`, `PGPASSWORD`, `PGHOST`, `PGPORT`) and then to
//! libpq's defaults (`localhost`, port `5432`, the OS user name).
//!
//! Exits non-zero when configuration, the document, the connection or the
//! schema step fails. Individual interfaces that fail are logged and do not
//! affect the exit status.

use std::process::ExitCode;

use devcfg_loader::config::LoaderSettings;
use devcfg_loader::error::LoaderError;
use devcfg_loader::pipeline;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devcfg_loader=info,devcfg_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match LoaderSettings::from_env() {
        Ok(settings) => {
            tracing::info!(
                path = %settings.document_path.display(),
                db = ?settings.db,
                "Starting devcfg-loader",
            );
            pipeline::run(&settings).await.map(|_| ())
        }
        Err(err) => Err(LoaderError::from(err)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Load aborted");
            ExitCode::FAILURE
        }
    }
}
