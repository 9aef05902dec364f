//! Reading the device configuration document.
//!
//! The document is a Frinx UniConfig export of a Cisco IOS-XE native
//! configuration. Only the interface collection is of interest; it lives
//! three levels down:
//!
//! ```text
//! { "frinx-uniconfig-topology:configuration":
//!     { "Cisco-IOS-XE-native:native":
//!         { "interface": { "<type>": [ { ... }, ... ], ... } } } }
//! ```

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::CoreError;

/// Path the loader reads when `DEVICE_CONFIG_PATH` is not set.
pub const DEFAULT_DOCUMENT_PATH: &str = "./data/configClear_v2.json";

/// Top-level key of the UniConfig topology export.
pub const TOPOLOGY_KEY: &str = "frinx-uniconfig-topology:configuration";

/// Key of the IOS-XE native configuration tree.
pub const NATIVE_KEY: &str = "Cisco-IOS-XE-native:native";

/// Key of the interface collection inside the native tree.
pub const INTERFACE_KEY: &str = "interface";

/// Key path from the document root to the interface collection.
pub const INTERFACE_PATH: [&str; 3] = [TOPOLOGY_KEY, NATIVE_KEY, INTERFACE_KEY];

/// The interface collection of a configuration document.
///
/// Maps an interface-type label (`GigabitEthernet`, `Loopback`, ...) to the
/// value stored under it, normally an array of interface objects. Keys keep
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDocument {
    interfaces: Map<String, Value>,
}

impl InterfaceDocument {
    /// Read and parse the document at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Extract the interface collection from an already parsed document.
    pub fn from_value(mut value: Value) -> Result<Self, CoreError> {
        let mut reached = Vec::with_capacity(INTERFACE_PATH.len());
        for key in INTERFACE_PATH {
            reached.push(key);
            value = match value {
                Value::Object(mut map) => map
                    .remove(key)
                    .ok_or_else(|| CoreError::MissingKey(reached.join(".")))?,
                _ => return Err(CoreError::MissingKey(reached.join("."))),
            };
        }

        match value {
            Value::Object(interfaces) => Ok(Self { interfaces }),
            other => Err(CoreError::InvalidShape(format!(
                "expected `{}` to be an object, got {}",
                INTERFACE_PATH.join("."),
                json_kind(&other)
            ))),
        }
    }

    /// Number of distinct interface-type labels in the document.
    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Interface-type labels in document order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.keys().map(String::as_str)
    }

    /// Raw value stored under an interface-type label.
    pub fn entries_of(&self, label: &str) -> Option<&Value> {
        self.interfaces.get(label)
    }

    /// `(label, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.interfaces.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Read the interface collection from the document at `path`.
pub fn read_data(path: impl AsRef<Path>) -> Result<InterfaceDocument, CoreError> {
    InterfaceDocument::read(path)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/configClear_v2.json");

    fn wrap(interfaces: Value) -> Value {
        json!({ TOPOLOGY_KEY: { NATIVE_KEY: { INTERFACE_KEY: interfaces } } })
    }

    #[test]
    fn test_fixture_has_five_interface_types() {
        let doc = read_data(FIXTURE).unwrap();
        assert_eq!(doc.len(), 5);
    }

    #[test]
    fn test_type_names_keep_document_order() {
        let doc = InterfaceDocument::from_value(wrap(json!({
            "Vlan": [],
            "GigabitEthernet": [],
            "Loopback": [],
        })))
        .unwrap();
        let names: Vec<&str> = doc.type_names().collect();
        assert_eq!(names, vec!["Vlan", "GigabitEthernet", "Loopback"]);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = wrap(json!({ "Port-channel": [{ "name": 1 }] }));
        write!(file, "{body}").unwrap();

        let doc = read_data(file.path()).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.entries_of("Port-channel"), Some(&json!([{ "name": 1 }])));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_data(dir.path().join("absent.json")).unwrap_err();
        assert_matches!(err, CoreError::Io { .. });
    }

    #[test]
    fn test_malformed_json() {
        let err = InterfaceDocument::from_json_str("{ not json").unwrap_err();
        assert_matches!(err, CoreError::Parse(_));
    }

    #[test]
    fn test_missing_native_key() {
        let err = InterfaceDocument::from_value(json!({ TOPOLOGY_KEY: {} })).unwrap_err();
        assert_matches!(err, CoreError::MissingKey(path) => {
            assert_eq!(path, format!("{TOPOLOGY_KEY}.{NATIVE_KEY}"));
        });
    }

    #[test]
    fn test_missing_topology_key() {
        let err = InterfaceDocument::from_value(json!({ "other": 1 })).unwrap_err();
        assert_matches!(err, CoreError::MissingKey(path) => assert_eq!(path, TOPOLOGY_KEY));
    }

    #[test]
    fn test_root_not_an_object() {
        let err = InterfaceDocument::from_value(json!([1, 2, 3])).unwrap_err();
        assert_matches!(err, CoreError::MissingKey(_));
    }

    #[test]
    fn test_interface_collection_must_be_object() {
        let err = InterfaceDocument::from_value(wrap(json!(["GigabitEthernet"]))).unwrap_err();
        assert_matches!(err, CoreError::InvalidShape(msg) => assert!(msg.contains("an array")));
    }
}
