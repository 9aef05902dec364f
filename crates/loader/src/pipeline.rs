//! The load run: read, filter, map, upsert.

use devcfg_core::document::{read_data, InterfaceDocument};
use devcfg_core::interface::{select_tracked, TrackedInterface};
use devcfg_db::models::device_configuration::UpsertOutcome;
use devcfg_db::repositories::DeviceConfigurationRepo;
use sqlx::PgPool;

use crate::config::LoaderSettings;
use crate::error::LoaderError;
use crate::mapper::map_record;

/// Per-interface tally of a load run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// New rows written.
    pub inserted: usize,
    /// Interfaces whose name was already present.
    pub skipped: usize,
    /// Interfaces that could not be mapped or inserted.
    pub failed: usize,
}

impl LoadReport {
    /// Number of tracked interfaces seen.
    pub fn processed(&self) -> usize {
        self.inserted + self.skipped + self.failed
    }
}

/// Execute a complete load run.
///
/// The document is read and filtered before the database is touched, so
/// input errors never open a connection. Once the connection is open it is
/// closed again on every path out of this function.
///
/// Assumes a single loader runs against the database at a time.
pub async fn run(settings: &LoaderSettings) -> Result<LoadReport, LoaderError> {
    let document = read_data(&settings.document_path)?;
    let tracked = select_tracked(&document)?;
    tracing::info!(
        path = %settings.document_path.display(),
        interface_types = document.len(),
        tracked = tracked.len(),
        "Read interface document",
    );

    let pool = devcfg_db::connect(&settings.db)
        .await
        .map_err(LoaderError::Connection)?;

    let result = load_on(&pool, &tracked).await;
    pool.close().await;
    tracing::debug!("Database connection closed");

    let report = result?;
    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        failed = report.failed,
        "Load complete",
    );
    Ok(report)
}

/// Load every tracked interface of `document` into an open database.
pub async fn load_document(
    pool: &PgPool,
    document: &InterfaceDocument,
) -> Result<LoadReport, LoaderError> {
    let tracked = select_tracked(document)?;
    load_interfaces(pool, &tracked).await
}

/// Ensure the schema, then map and upsert each interface in order.
///
/// A failure on one interface is logged and counted; the remaining
/// interfaces are still processed.
pub async fn load_interfaces(
    pool: &PgPool,
    interfaces: &[TrackedInterface<'_>],
) -> Result<LoadReport, LoaderError> {
    devcfg_db::ensure_schema(pool)
        .await
        .map_err(LoaderError::Schema)?;

    let mut report = LoadReport::default();

    for entry in interfaces {
        let row = match map_record(entry.kind, entry.raw) {
            Ok(row) => row,
            Err(err) => {
                tracing::error!(
                    interface_type = %entry.kind,
                    error = %err,
                    "Skipping interface that could not be mapped",
                );
                report.failed += 1;
                continue;
            }
        };

        match DeviceConfigurationRepo::upsert(pool, &row).await {
            Ok(UpsertOutcome::Inserted(id)) => {
                tracing::info!(id, name = %row.name, "Inserted interface");
                report.inserted += 1;
            }
            Ok(UpsertOutcome::Skipped) => {
                tracing::debug!(name = %row.name, "Interface already present");
                report.skipped += 1;
            }
            Err(err) => {
                tracing::error!(name = %row.name, error = %err, "Failed to insert interface");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

async fn load_on(
    pool: &PgPool,
    interfaces: &[TrackedInterface<'_>],
) -> Result<LoadReport, LoaderError> {
    devcfg_db::health_check(pool)
        .await
        .map_err(LoaderError::Connection)?;
    tracing::info!("Connection to database successful");

    load_interfaces(pool, interfaces).await
}
