//! Repository for the `device_configuration` table.

use devcfg_core::types::DbId;
use sqlx::PgPool;

use crate::models::device_configuration::{
    CreateDeviceConfiguration, DeviceConfiguration, UpsertOutcome,
};

/// Column list for `device_configuration` queries.
const COLUMNS: &str = "\
    id, connection, name, description, config, type, \
    infra_type, port_channel_id, max_frame_size";

/// Provides data access for interface configuration rows.
pub struct DeviceConfigurationRepo;

impl DeviceConfigurationRepo {
    /// Insert a row unless one with the same name already exists.
    ///
    /// Uses `ON CONFLICT (name) DO NOTHING` so the existence check and the
    /// insert are a single atomic statement. Existing rows are never
    /// modified.
    ///
    /// `config` is sent as text and cast to `json`; binding a
    /// `serde_json::Value` directly would go through `jsonb`, which rejects
    /// `\u0000` escapes.
    pub async fn upsert(
        pool: &PgPool,
        dto: &CreateDeviceConfiguration,
    ) -> Result<UpsertOutcome, sqlx::Error> {
        let config =
            serde_json::to_string(&dto.config).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let inserted = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO device_configuration \
                 (name, description, config, port_channel_id, max_frame_size, \
                  connection, type, infra_type) \
             VALUES ($1, $2, $3::text::json, $4, $5, $6, $7, $8) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(config)
        .bind(dto.port_channel_id)
        .bind(dto.max_frame_size)
        .bind(dto.connection)
        .bind(&dto.interface_type)
        .bind(&dto.infra_type)
        .fetch_optional(pool)
        .await?;

        Ok(match inserted {
            Some(id) => UpsertOutcome::Inserted(id),
            None => UpsertOutcome::Skipped,
        })
    }

    /// Find a row by its interface name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<DeviceConfiguration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM device_configuration WHERE name = $1");
        sqlx::query_as::<_, DeviceConfiguration>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row with this name exists.
    pub async fn exists_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM device_configuration WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Total number of rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM device_configuration")
            .fetch_one(pool)
            .await
    }

    /// All rows in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<DeviceConfiguration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM device_configuration ORDER BY id");
        sqlx::query_as::<_, DeviceConfiguration>(&query)
            .fetch_all(pool)
            .await
    }
}
