//! List-level commands: create, delete, lists, show

use super::error_reply;
use crate::lists::ListStore;

pub fn create(store: &mut ListStore, name: &str) -> String {
    match store.create(name) {
        Ok(name) => format!("✅ Created list '{}'", name),
        Err(e) => {
            log::warn!("Failed to create list '{}': {}", name, e);
            error_reply(&e)
        }
    }
}

pub fn delete(store: &mut ListStore, name: &str) -> String {
    match store.delete(name) {
        Ok(deleted) => format!(
            "🗑️ Deleted list '{}' ({} items)",
            deleted.name, deleted.item_count
        ),
        Err(e) => {
            log::warn!("Failed to delete list '{}': {}", name, e);
            error_reply(&e)
        }
    }
}

pub fn list_all(store: &ListStore) -> String {
    let lists = store.list_all();
    if lists.is_empty() {
        return "📝 No lists created yet! Use 'create <list_name>' to create one.".to_string();
    }

    let mut result = String::from("📚 All Lists:");
    for list in lists {
        result.push_str(&format!("\n• {} ({} items)", list.name, list.item_count));
    }
    result
}

pub fn show(store: &ListStore, name: &str) -> String {
    let view = match store.show(name) {
        Ok(view) => view,
        Err(e) => {
            log::warn!("Failed to show list '{}': {}", name, e);
            return error_reply(&e);
        }
    };

    if view.is_empty() {
        return format!("📝 List '{}' is empty", view.name);
    }

    let mut result = format!("📋 {} ({} items):", view.name, view.entries.len());
    for entry in &view.entries {
        result.push_str(&format!("\n{}. {}", entry.position, entry.item));
    }
    result
}
