//! Goals file loading and work order resolution.
//!
//! A goals file is a JSON object with two required keys:
//!
//! ```json
//! {
//!   "bin_contents": { "bin_A": ["item_1", "item_2"], "bin_B": [] },
//!   "work_order": [ { "bin": "bin_A", "item": "item_2" } ]
//! }
//! ```
//!
//! Bin names are kept sorted, so a bin's rank is its index in
//! [`Goals::bin_names`] regardless of the key order in the file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShelfError;
use crate::layout::{GridPosition, Layout};

/// Parsed goals file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goals {
    /// Item names per bin, keyed by bin name (sorted).
    pub bin_contents: BTreeMap<String, Vec<String>>,
    /// The `work_order` value as written. Only [`Goals::resolve_work_order`]
    /// requires it to be a list of picks.
    pub work_order: serde_json::Value,
}

/// One requested pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderEntry {
    pub bin: String,
    pub item: String,
}

/// A work order entry resolved against the shelf layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTarget {
    pub bin: String,
    pub item: String,
    pub position: GridPosition,
    /// Slot holding the item, `None` if the bin does not list it.
    pub slot: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawGoals {
    bin_contents: BTreeMap<String, Vec<serde_json::Value>>,
    work_order: serde_json::Value,
}

impl Goals {
    /// Read and parse a goals file.
    pub fn from_path(path: &Path) -> Result<Self, ShelfError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShelfError::Goals(format!("cannot read goals file {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a goals document from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ShelfError> {
        let raw: RawGoals = serde_json::from_str(s)?;
        let bin_contents = raw
            .bin_contents
            .into_iter()
            .map(|(bin, items)| (bin, items.iter().map(item_text).collect()))
            .collect();
        Ok(Self {
            bin_contents,
            work_order: raw.work_order,
        })
    }

    /// Bin names in rank order.
    pub fn bin_names(&self) -> impl Iterator<Item = &str> {
        self.bin_contents.keys().map(String::as_str)
    }

    /// Rank of a bin, i.e. its index among the sorted bin names.
    pub fn rank_of(&self, bin: &str) -> Option<usize> {
        self.bin_names().position(|name| name == bin)
    }

    /// The work order as a list of picks.
    pub fn work_order_entries(&self) -> Result<Vec<WorkOrderEntry>, ShelfError> {
        Vec::<WorkOrderEntry>::deserialize(&self.work_order).map_err(|e| {
            ShelfError::Goals(format!(
                "work_order must be a list of {{\"bin\", \"item\"}} objects: {e}"
            ))
        })
    }

    /// Resolve every work order entry to its grid position and slot.
    ///
    /// A work order that is not a list of picks is an error, as is an entry
    /// naming a bin absent from `bin_contents`. An entry whose item is not
    /// listed in its bin resolves with no slot.
    pub fn resolve_work_order(&self, layout: &Layout) -> Result<Vec<WorkTarget>, ShelfError> {
        self.work_order_entries()?
            .into_iter()
            .map(|entry| {
                let rank = self
                    .rank_of(&entry.bin)
                    .ok_or_else(|| ShelfError::UnknownBin(entry.bin.clone()))?;
                let slot = self.bin_contents[&entry.bin]
                    .iter()
                    .position(|item| *item == entry.item);
                if slot.is_none() {
                    tracing::warn!(
                        bin = %entry.bin,
                        item = %entry.item,
                        "work order item not listed in its bin"
                    );
                }
                Ok(WorkTarget {
                    bin: entry.bin,
                    item: entry.item,
                    position: layout.position(rank),
                    slot,
                })
            })
            .collect()
    }
}

/// Render a bin entry as an item name.
///
/// - Strings: unquoted
/// - Numbers: as-is
/// - Null/bools: `None`, `True`, `False`
/// - Arrays/objects: compact JSON
fn item_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "None".to_string(),
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
