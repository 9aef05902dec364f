//! Mapping of raw interface objects to `device_configuration` rows.

use devcfg_core::interface::InterfaceType;
use devcfg_core::types::InterfaceObject;
use devcfg_db::models::device_configuration::CreateDeviceConfiguration;
use serde_json::Value;

/// Key of the interface's own name, e.g. `"0/0/1"` or `20`.
pub const NAME_KEY: &str = "name";

pub const DESCRIPTION_KEY: &str = "description";

/// Copied into `max_frame_size`.
pub const MTU_KEY: &str = "mtu";

/// Link-aggregation membership of a physical interface.
pub const CHANNEL_GROUP_KEY: &str = "Cisco-IOS-XE-ethernet:channel-group";

/// Port-channel number inside [`CHANNEL_GROUP_KEY`].
pub const CHANNEL_NUMBER_KEY: &str = "number";

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("interface has no `name`")]
    MissingName,

    #[error("`name` must be a string or a number, got {0}")]
    InvalidName(Value),

    #[error("`{field}` must be a 32-bit integer, got {value}")]
    InvalidInteger { field: &'static str, value: Value },
}

/// Map one interface object into an insert DTO.
///
/// The row name is the type label followed by the interface's own name,
/// so `{"name": "0/0/1"}` under `GigabitEthernet` becomes
/// `GigabitEthernet0/0/1`. The full object is kept in `config`.
pub fn map_record(
    kind: InterfaceType,
    raw: &InterfaceObject,
) -> Result<CreateDeviceConfiguration, MappingError> {
    let name = match raw.get(NAME_KEY) {
        Some(Value::String(name)) => format!("{kind}{name}"),
        Some(Value::Number(number)) => format!("{kind}{number}"),
        None | Some(Value::Null) => return Err(MappingError::MissingName),
        Some(other) => return Err(MappingError::InvalidName(other.clone())),
    };

    let description = match raw.get(DESCRIPTION_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    };

    let max_frame_size = optional_i32(raw.get(MTU_KEY), MTU_KEY)?;

    let port_channel_id = match raw.get(CHANNEL_GROUP_KEY) {
        Some(Value::Object(group)) => {
            optional_i32(group.get(CHANNEL_NUMBER_KEY), "channel-group.number")?
        }
        _ => None,
    };

    Ok(CreateDeviceConfiguration {
        name,
        description,
        config: Value::Object(raw.clone()),
        port_channel_id,
        max_frame_size,
        connection: None,
        interface_type: None,
        infra_type: None,
    })
}

/// Read an optional integer column value.
///
/// Accepts JSON integers and strings holding one; anything else that is
/// not null is rejected rather than silently dropped.
fn optional_i32(value: Option<&Value>, field: &'static str) -> Result<Option<i32>, MappingError> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(None);
    };

    let parsed = match value {
        Value::Number(number) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<i32>().ok(),
        _ => None,
    };

    parsed
        .map(Some)
        .ok_or_else(|| MappingError::InvalidInteger {
            field,
            value: value.clone(),
        })
}
