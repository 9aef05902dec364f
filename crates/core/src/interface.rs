//! Tracked interface types and document filtering.
//!
//! Only three interface families are loaded into `device_configuration`.
//! Everything else in the document (loopbacks, VLAN interfaces, tunnels,
//! ...) is ignored.

use std::fmt;

use serde_json::Value;

use crate::document::{json_kind, InterfaceDocument};
use crate::error::CoreError;
use crate::types::InterfaceObject;

// ---------------------------------------------------------------------------
// Tracked types
// ---------------------------------------------------------------------------

/// An interface family that the loader persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceType {
    PortChannel,
    TenGigabitEthernet,
    GigabitEthernet,
}

impl InterfaceType {
    /// Every tracked type.
    pub const ALL: [InterfaceType; 3] = [
        InterfaceType::PortChannel,
        InterfaceType::TenGigabitEthernet,
        InterfaceType::GigabitEthernet,
    ];

    /// The type label exactly as it appears in the document.
    pub fn label(self) -> &'static str {
        match self {
            InterfaceType::PortChannel => "Port-channel",
            InterfaceType::TenGigabitEthernet => "TenGigabitEthernet",
            InterfaceType::GigabitEthernet => "GigabitEthernet",
        }
    }

    /// Resolve a document label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// One interface object under a tracked type label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedInterface<'a> {
    pub kind: InterfaceType,
    pub raw: &'a InterfaceObject,
}

/// Select every interface object under a tracked type label.
///
/// Order follows the document: type labels first, then position within
/// each label's array. Untracked labels are not inspected at all, so their
/// shape does not matter. A tracked label must hold an array of objects.
pub fn select_tracked(doc: &InterfaceDocument) -> Result<Vec<TrackedInterface<'_>>, CoreError> {
    let mut selected = Vec::new();

    for (label, entries) in doc.iter() {
        let Some(kind) = InterfaceType::from_label(label) else {
            continue;
        };

        let Value::Array(items) = entries else {
            return Err(CoreError::InvalidShape(format!(
                "expected `{label}` to be an array, got {}",
                json_kind(entries)
            )));
        };

        for (index, item) in items.iter().enumerate() {
            let Value::Object(raw) = item else {
                return Err(CoreError::InvalidShape(format!(
                    "expected `{label}[{index}]` to be an object, got {}",
                    json_kind(item)
                )));
            };
            selected.push(TrackedInterface { kind, raw });
        }
    }

    Ok(selected)
}
