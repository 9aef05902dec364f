//! Creation of the `device_configuration` table.

use sqlx::PgPool;

/// Name of the table populated by the loader.
pub const TABLE_NAME: &str = "device_configuration";

/// Column names in table order.
pub const COLUMN_NAMES: [&str; 9] = [
    "id",
    "connection",
    "name",
    "description",
    "config",
    "type",
    "infra_type",
    "port_channel_id",
    "max_frame_size",
];

const CREATE_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS device_configuration ( \
        id BIGSERIAL PRIMARY KEY, \
        connection INTEGER NULL, \
        name VARCHAR(255) NOT NULL UNIQUE, \
        description VARCHAR(255), \
        config JSON, \
        type VARCHAR(50) NULL, \
        infra_type VARCHAR(50) NULL, \
        port_channel_id INTEGER NULL, \
        max_frame_size INTEGER NULL \
    )";

/// Tables created before `name` was declared unique lack the constraint
/// that `ON CONFLICT (name)` relies on. For a table created by
/// [`CREATE_TABLE`] this index already exists under the same name.
const CREATE_NAME_INDEX: &str = "\
    CREATE UNIQUE INDEX IF NOT EXISTS device_configuration_name_key \
    ON device_configuration (name)";

/// Create `device_configuration` if it does not exist yet.
///
/// Safe to call on every run. Fails if an existing table already holds
/// duplicate names, since the unique index cannot be built over them.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    sqlx::query(CREATE_NAME_INDEX).execute(pool).await?;
    tracing::debug!(table = TABLE_NAME, "Schema ensured");
    Ok(())
}
