/// Primary keys of `device_configuration` are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// A single interface entry as it appears in the source document.
pub type InterfaceObject = serde_json::Map<String, serde_json::Value>;
