//! Stats command - hidden debugging summary of the store

use crate::lists::ListStore;

pub fn execute(store: &ListStore) -> String {
    let stats = store.stats();
    log::debug!(
        "Stats: {}",
        serde_json::to_string(&stats).unwrap_or_default()
    );

    format!(
        "📊 Bot Statistics:\n\
        • Total lists: {}\n\
        • Total items: {}\n\
        • Average items per list: {:.1}\n\
        • Largest list size: {}",
        stats.total_lists, stats.total_items, stats.average_items_per_list, stats.largest_list_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_bot_types::ListLimits;

    #[test]
    fn test_stats_reply() {
        let mut store = ListStore::new(ListLimits::default());
        store.create("a").unwrap();
        store.create("b").unwrap();
        store.create("c").unwrap();
        store.add("a", "x").unwrap();

        let reply = execute(&store);
        assert!(reply.contains("Total lists: 3"));
        assert!(reply.contains("Total items: 1"));
        assert!(reply.contains("Average items per list: 0.3"));
        assert!(reply.contains("Largest list size: 1"));
    }
}
