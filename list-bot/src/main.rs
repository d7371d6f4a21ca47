use dotenv::dotenv;
use list_bot::channels::telegram;
use list_bot::config::{env_vars, StoreConfig, TelegramConfig};
use list_bot::lists::ListStore;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let telegram_config = match TelegramConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            eprintln!("Please create a .env file with your bot token:");
            eprintln!("{}=your_bot_token_here", env_vars::TELEGRAM_BOT_TOKEN);
            eprintln!(
                "\nOptional: Add {} to restrict the bot to a specific chat",
                env_vars::AUTHORIZED_CHAT_ID
            );
            std::process::exit(1);
        }
    };
    let store_config = StoreConfig::from_env();

    log::info!("Opening list data at {}", store_config.data_file.display());
    let store = ListStore::open(&store_config);
    log::info!("Loaded {} lists", store.len());

    match telegram_config.authorized_chat_id {
        Some(chat_id) => log::info!("🔒 Restricted to chat ID: {}", chat_id),
        None => log::info!("🌐 Open to all chats"),
    }

    log::info!("🤖 Starting List Bot (Ctrl+C to stop)");
    telegram::start(telegram_config, store).await;
}
