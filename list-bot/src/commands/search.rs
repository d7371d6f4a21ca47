//! Search command - substring match across every list

use crate::lists::ListStore;

pub fn execute(store: &ListStore, term: &str) -> String {
    let term = term.trim();
    let hits = store.search(term);
    if hits.is_empty() {
        return format!("❌ No items found containing '{}'", term);
    }

    let mut result = format!("🔍 Search results for '{}':", term);
    for hit in hits {
        result.push_str(&format!("\n📋 {}: {}", hit.list_name, hit.item));
    }
    result
}
