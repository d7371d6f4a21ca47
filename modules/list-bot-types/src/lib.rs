//! Shared types for the list store and the transports that drive it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =====================================================
// Persisted Document
// =====================================================

/// On-disk shape of the whole collection: display name -> items in order.
pub type ListDocument = BTreeMap<String, Vec<String>>;

// =====================================================
// Limits
// =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLimits {
    pub max_lists: usize,
    pub max_items_per_list: usize,
    pub max_list_name_length: usize,
    pub max_item_length: usize,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            max_lists: 50,
            max_items_per_list: 100,
            max_list_name_length: 50,
            max_item_length: 200,
        }
    }
}

// =====================================================
// Query Results
// =====================================================

/// One row of `lists`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub name: String,
    pub item_count: usize,
}

/// An item with its 1-based display position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub position: usize,
    pub item: String,
}

/// Contents of a single list as returned by `show`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub name: String,
    pub entries: Vec<ListEntry>,
}

impl ListView {
    pub fn new(name: impl Into<String>, items: &[String]) -> Self {
        Self {
            name: name.into(),
            entries: items
                .iter()
                .enumerate()
                .map(|(i, item)| ListEntry {
                    position: i + 1,
                    item: item.clone(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn items(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.item.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub list_name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStats {
    pub total_lists: usize,
    pub total_items: usize,
    pub average_items_per_list: f64,
    pub largest_list_size: usize,
}

// =====================================================
// Mutation Outcomes
// =====================================================

/// Result of adding a single item. A duplicate is not an error, but callers
/// need to tell it apart from a real insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddOutcome {
    Added { list_name: String, item: String },
    Duplicate { list_name: String, item: String },
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }
}

/// An item taken out of a list, with the 1-based position it held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedItem {
    pub list_name: String,
    pub item: String,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedItem {
    pub item: String,
    pub reason: String,
}

/// Per-item breakdown of a comma-separated batch add
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddManyOutcome {
    pub list_name: String,
    pub added: Vec<String>,
    pub duplicates: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedItem>,
}

// =====================================================
// Errors
// =====================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// No list with this name (case-insensitive)
    NotFound { name: String },
    ItemNotFound { list: String, item: String },
    AlreadyExists { name: String },
    /// Empty or over-long names/items
    Validation(String),
    /// Too many lists, or too many items in one list
    LimitExceeded(String),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::NotFound { name } => write!(f, "List '{}' not found", name),
            ListError::ItemNotFound { list, item } => {
                write!(f, "'{}' not found in '{}'", item, list)
            }
            ListError::AlreadyExists { name } => write!(f, "List '{}' already exists", name),
            ListError::Validation(msg) => write!(f, "{}", msg),
            ListError::LimitExceeded(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ListError {}
