//! Telegram transport: long polling via teloxide, one reply per command.

use super::util::{split_message, TELEGRAM_MAX_MESSAGE_LEN};
use crate::commands::{self, Command, ParseError};
use crate::config::TelegramConfig;
use crate::lists::ListStore;
use parking_lot::Mutex;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::utils::command::BotCommands;

const WELCOME: &str = "🤖 List Bot is ready!\n\n\
    I'll help you manage lists in this group chat using simple keyword commands.\n\n\
    Type any of these commands to get started:\n\
    • `help` - Show all available commands\n\
    • `create groceries` - Create a new list\n\
    • `lists` - Show all your lists\n\n\
    Just type the commands without slashes!\n\n\
    Quick Example:\n\
    • `create shopping`\n\
    • `add shopping milk`\n\
    • `add shopping bread`\n\
    • `show shopping`";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Slash commands:")]
pub enum SlashCommand {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "show all list commands")]
    Help,
}

/// Shared by every handler. The mutex serializes command handling so each
/// command, including its persistence write, finishes before the next.
pub struct BotState {
    pub store: Mutex<ListStore>,
    pub config: TelegramConfig,
}

impl BotState {
    pub fn new(config: TelegramConfig, store: ListStore) -> Self {
        Self {
            store: Mutex::new(store),
            config,
        }
    }

    /// Run one text message through the interpreter. `None` means stay
    /// silent: blank input, or a keyword we don't know (avoids chat spam).
    pub fn reply_to(&self, text: &str, bot_handle: &str) -> Option<String> {
        match commands::parse(text, Some(bot_handle)) {
            Ok(cmd) => {
                let mut store = self.store.lock();
                Some(commands::execute(cmd, &mut store, Some(bot_handle)))
            }
            Err(ParseError::Unknown(token)) => {
                log::debug!("Telegram: Ignoring unknown command '{}'", token);
                None
            }
            Err(ParseError::Empty) => None,
            Err(e) => Some(e.reply()),
        }
    }

    pub fn reply_to_slash(&self, cmd: &SlashCommand, bot_handle: &str) -> String {
        match cmd {
            SlashCommand::Start => WELCOME.to_string(),
            SlashCommand::Help => {
                let mut store = self.store.lock();
                commands::execute(Command::Help, &mut store, Some(bot_handle))
            }
        }
    }
}

/// Start long polling. Returns when the dispatcher stops (Ctrl+C).
pub async fn start(config: TelegramConfig, store: ListStore) {
    let bot = Bot::new(config.token.clone());
    let state = Arc::new(BotState::new(config, store));

    if let Err(e) = bot.set_my_commands(SlashCommand::bot_commands()).await {
        log::warn!("Telegram: Failed to register slash commands: {}", e);
    }

    let handler = Update::filter_message()
        .filter(is_authorized_chat)
        .branch(
            dptree::entry()
                .filter_command::<SlashCommand>()
                .endpoint(handle_slash_command),
        )
        .branch(dptree::endpoint(handle_message));

    log::info!("Telegram: Starting long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            log::debug!("Telegram: Unhandled update {}", upd.id);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    log::info!("Telegram: Dispatcher stopped");
}

fn is_authorized_chat(msg: Message, state: Arc<BotState>) -> bool {
    let chat_id = msg.chat.id.0;
    if state.config.is_authorized(chat_id) {
        true
    } else {
        log::warn!("Telegram: Unauthorized chat {} tried to use bot", chat_id);
        false
    }
}

async fn handle_slash_command(
    bot: Bot,
    msg: Message,
    cmd: SlashCommand,
    me: Me,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    log::info!(
        "Telegram: /{:?} from user {:?} in chat {}",
        cmd,
        msg.from().map(|u| u.id.0),
        msg.chat.id.0
    );
    let reply = state.reply_to_slash(&cmd, me.username());
    send_reply(&bot, msg.chat.id, &reply).await
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    me: Me,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    log::info!(
        "Telegram: 📋 CHAT ID: {} (User: {:?})",
        msg.chat.id.0,
        msg.from().map(|u| u.id.0)
    );

    if let Some(reply) = state.reply_to(text, me.username()) {
        send_reply(&bot, msg.chat.id, &reply).await?;
    }
    Ok(())
}

async fn send_reply(bot: &Bot, chat_id: ChatId, text: &str) -> ResponseResult<()> {
    for chunk in split_message(text, TELEGRAM_MAX_MESSAGE_LEN) {
        bot.send_message(chat_id, chunk).await?;
    }
    Ok(())
}
