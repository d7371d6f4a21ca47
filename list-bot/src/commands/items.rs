//! Item-level commands: add, multi-add, remove

use super::error_reply;
use crate::lists::ListStore;
use list_bot_types::AddOutcome;

/// Split comma-separated items, trimming each and dropping empties
pub fn split_items(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn add(store: &mut ListStore, list: &str, item: &str) -> String {
    match store.add(list, item) {
        Ok(AddOutcome::Added { list_name, item }) => {
            format!("✅ Added '{}' to '{}'", item, list_name)
        }
        Ok(AddOutcome::Duplicate { list_name, item }) => {
            format!("⚠️ '{}' is already in '{}'", item, list_name)
        }
        Err(e) => {
            log::warn!("Failed to add item '{}' to '{}': {}", item, list, e);
            error_reply(&e)
        }
    }
}

pub fn add_many(store: &mut ListStore, list: &str, items: &[String]) -> String {
    let outcome = match store.add_many(list, items) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("Failed to add multiple items to '{}': {}", list, e);
            return error_reply(&e);
        }
    };

    let mut lines = Vec::new();
    if !outcome.added.is_empty() {
        lines.push(format!(
            "✅ Added {} items to '{}':",
            outcome.added.len(),
            outcome.list_name
        ));
        lines.extend(outcome.added.iter().map(|item| format!("  • {}", item)));
    }
    if !outcome.duplicates.is_empty() {
        lines.push(format!(
            "⚠️ Skipped {} duplicate items:",
            outcome.duplicates.len()
        ));
        lines.extend(outcome.duplicates.iter().map(|item| format!("  • {}", item)));
    }
    if !outcome.rejected.is_empty() {
        lines.push(format!("❌ Failed to add {} items:", outcome.rejected.len()));
        lines.extend(
            outcome
                .rejected
                .iter()
                .map(|r| format!("  • {} ({})", r.item, r.reason)),
        );
    }

    if lines.is_empty() {
        return "❌ No items were processed".to_string();
    }
    lines.join("\n")
}

pub fn remove(store: &mut ListStore, list: &str, item: &str) -> String {
    match store.remove(list, item) {
        Ok(removed) => format!("✅ Removed '{}' from '{}'", removed.item, removed.list_name),
        Err(e) => {
            log::warn!("Failed to remove item '{}' from '{}': {}", item, list, e);
            error_reply(&e)
        }
    }
}
