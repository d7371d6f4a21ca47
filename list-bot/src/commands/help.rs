//! Help command - shows available commands

use list_bot_types::ListLimits;

/// Execute the help command. `bot_handle` shapes the quick-add examples:
/// a mention on chat platforms, the `multi` keyword otherwise.
pub fn execute(limits: &ListLimits, bot_handle: Option<&str>) -> String {
    let quick_add = match bot_handle {
        Some(handle) => format!("@{}", handle),
        None => "multi".to_string(),
    };

    format!(
        "🤖 List Bot Commands:\n\n\
        List Management:\n\
        • `create <list_name>` - Create a new list\n\
        • `lists` - Show all lists\n\
        • `delete <list_name>` - Delete a list\n\n\
        Item Management:\n\
        • `add <list_name> <item>` - Add item to list\n\
        • `remove <list_name> <item>` - Remove item from list\n\
        • `show <list_name>` - Show all items in list\n\n\
        Quick Add:\n\
        • `{q} <list_name> <item1>, <item2>, <item3>` - Add multiple items at once\n\
        • `{q} groceries milk, bread, eggs` - Example: add 3 items to groceries\n\n\
        Search:\n\
        • `search <term>` - Search for items across all lists\n\n\
        Examples:\n\
        • `create groceries`\n\
        • `add groceries milk`\n\
        • `{q} groceries bread, eggs, butter`\n\
        • `show groceries`\n\
        • `search milk`\n\n\
        Limits:\n\
        • Max lists: {}\n\
        • Max items per list: {}\n\
        • Max list name length: {}\n\
        • Max item length: {}",
        limits.max_lists,
        limits.max_items_per_list,
        limits.max_list_name_length,
        limits.max_item_length,
        q = quick_add,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_uses_mention_when_known() {
        let text = execute(&ListLimits::default(), Some("listbot"));
        assert!(text.contains("`@listbot groceries milk, bread, eggs`"));
        assert!(!text.contains("`multi"));
    }

    #[test]
    fn test_help_lists_limits() {
        let text = execute(&ListLimits::default(), None);
        assert!(text.contains("`multi <list_name>"));
        assert!(text.contains("Max lists: 50"));
        assert!(text.contains("Max item length: 200"));
        for keyword in ["create", "lists", "delete", "add", "remove", "show", "search"] {
            assert!(text.contains(&format!("`{}", keyword)), "missing {}", keyword);
        }
    }
}
