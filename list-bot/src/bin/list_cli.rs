//! Terminal harness: drive the list bot from stdin without Telegram.

use dotenv::dotenv;
use list_bot::channels::terminal;
use list_bot::config::StoreConfig;
use list_bot::lists::ListStore;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    // keep log lines from interleaving with the prompt unless asked for
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let store_config = StoreConfig::from_env();
    let mut store = ListStore::open(&store_config);

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    tokio::select! {
        result = terminal::run(&mut store, input, output) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\n{}", terminal::GOODBYE);
            Ok(())
        }
    }
}
