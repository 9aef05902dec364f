//! Models for the `device_configuration` table.

use devcfg_core::types::DbId;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `device_configuration` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DeviceConfiguration {
    pub id: DbId,
    pub connection: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub config: Option<serde_json::Value>,
    #[sqlx(rename = "type")]
    pub interface_type: Option<String>,
    pub infra_type: Option<String>,
    pub port_channel_id: Option<i32>,
    pub max_frame_size: Option<i32>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a new interface row.
///
/// `connection`, `interface_type` and `infra_type` are reserved columns;
/// the loader always leaves them `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateDeviceConfiguration {
    pub name: String,
    pub description: Option<String>,
    pub config: serde_json::Value,
    pub port_channel_id: Option<i32>,
    pub max_frame_size: Option<i32>,
    pub connection: Option<i32>,
    pub interface_type: Option<String>,
    pub infra_type: Option<String>,
}

/// Result of an insert-if-absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new row was written with this id.
    Inserted(DbId),
    /// A row with the same name already existed; nothing was written.
    Skipped,
}

impl UpsertOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, UpsertOutcome::Inserted(_))
    }
}
