use list_bot_types::ListLimits;
use std::env;
use std::path::PathBuf;

/// Environment variable names
pub mod env_vars {
    pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
    pub const AUTHORIZED_CHAT_ID: &str = "AUTHORIZED_CHAT_ID";
    pub const DATA_FILE: &str = "LISTS_DATA_FILE";
    pub const BACKUP_ENABLED: &str = "LISTS_BACKUP_ENABLED";
    pub const MAX_LISTS: &str = "LISTS_MAX_LISTS";
    pub const MAX_ITEMS_PER_LIST: &str = "LISTS_MAX_ITEMS_PER_LIST";
    pub const MAX_LIST_NAME_LENGTH: &str = "LISTS_MAX_LIST_NAME_LENGTH";
    pub const MAX_ITEM_LENGTH: &str = "LISTS_MAX_ITEM_LENGTH";
}

pub const DEFAULT_DATA_FILE: &str = "lists_data.json";

/// Where and how the list store persists, plus its size limits
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_file: PathBuf,
    pub backup_enabled: bool,
    pub limits: ListLimits,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            backup_enabled: true,
            limits: ListLimits::default(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let defaults = ListLimits::default();
        Self {
            data_file: env::var(env_vars::DATA_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE)),
            backup_enabled: env::var(env_vars::BACKUP_ENABLED)
                .map(|v| parse_bool(&v, true))
                .unwrap_or(true),
            limits: ListLimits {
                max_lists: env_usize(env_vars::MAX_LISTS, defaults.max_lists),
                max_items_per_list: env_usize(
                    env_vars::MAX_ITEMS_PER_LIST,
                    defaults.max_items_per_list,
                ),
                max_list_name_length: env_usize(
                    env_vars::MAX_LIST_NAME_LENGTH,
                    defaults.max_list_name_length,
                ),
                max_item_length: env_usize(env_vars::MAX_ITEM_LENGTH, defaults.max_item_length),
            },
        }
    }
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub token: String,
    /// When set, every other chat is ignored
    pub authorized_chat_id: Option<i64>,
}

impl TelegramConfig {
    pub fn from_env() -> Result<Self, String> {
        let token = env::var(env_vars::TELEGRAM_BOT_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| format!("{} not set", env_vars::TELEGRAM_BOT_TOKEN))?;

        let authorized_chat_id = env::var(env_vars::AUTHORIZED_CHAT_ID)
            .ok()
            .and_then(|raw| parse_chat_id(&raw));

        Ok(Self {
            token,
            authorized_chat_id,
        })
    }

    pub fn is_authorized(&self, chat_id: i64) -> bool {
        self.authorized_chat_id.map_or(true, |allowed| allowed == chat_id)
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .field("authorized_chat_id", &self.authorized_chat_id)
            .finish()
    }
}

fn parse_chat_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            log::warn!(
                "Ignoring {}={:?}: not a numeric chat id",
                env_vars::AUTHORIZED_CHAT_ID,
                raw
            );
            None
        }
    }
}

fn parse_bool(raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(raw) => parse_limit(&raw).unwrap_or_else(|| {
            log::warn!("{} must be a positive number, using {}", name, default);
            default
        }),
        Err(_) => default,
    }
}

/// Limits are positive integers
fn parse_limit(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_id() {
        assert_eq!(parse_chat_id("-1001234567890"), Some(-1001234567890));
        assert_eq!(parse_chat_id(" 42 "), Some(42));
        assert_eq!(parse_chat_id(""), None);
        assert_eq!(parse_chat_id("not-a-chat"), None);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE", false));
        assert!(parse_bool("on", false));
        assert!(!parse_bool("0", true));
        assert!(!parse_bool("No", true));
        assert!(parse_bool("maybe", true));
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("12"), Some(12));
        assert_eq!(parse_limit(" 7 "), Some(7));
        assert_eq!(parse_limit("abc"), None);
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("-3"), None);
    }

    #[test]
    fn test_env_usize_falls_back_to_default() {
        // SAFETY: no other test reads this variable
        unsafe { env::set_var("LISTS_TEST_ZERO_LIMIT", "0") };
        assert_eq!(env_usize("LISTS_TEST_ZERO_LIMIT", 50), 50);
        unsafe { env::set_var("LISTS_TEST_ZERO_LIMIT", "lots") };
        assert_eq!(env_usize("LISTS_TEST_ZERO_LIMIT", 50), 50);
        unsafe { env::set_var("LISTS_TEST_ZERO_LIMIT", "25") };
        assert_eq!(env_usize("LISTS_TEST_ZERO_LIMIT", 50), 25);
        unsafe { env::remove_var("LISTS_TEST_ZERO_LIMIT") };
        assert_eq!(env_usize("LISTS_TEST_ZERO_LIMIT", 50), 50);
    }

    #[test]
    fn test_authorization() {
        let open = TelegramConfig {
            token: "t".to_string(),
            authorized_chat_id: None,
        };
        assert!(open.is_authorized(1));
        assert!(open.is_authorized(-99));

        let locked = TelegramConfig {
            token: "t".to_string(),
            authorized_chat_id: Some(-99),
        };
        assert!(locked.is_authorized(-99));
        assert!(!locked.is_authorized(1));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = TelegramConfig {
            token: "123:secret".to_string(),
            authorized_chat_id: None,
        };
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
