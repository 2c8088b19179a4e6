//! Telegram update handling.
//!
//! Handlers translate an update into a [`Reply`] and deliver it. The
//! sender is counted only after every message of a reading went out.

use std::sync::Arc;

use chrono::Utc;
use teloxide::dispatching::UpdateHandler;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{InputFile, KeyboardButton, KeyboardMarkup, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info};

use crate::AppState;
use crate::error::BotError;
use crate::reply::{LUNAR_DAY_BUTTON, Outgoing, Reply};

/// Supported slash commands.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды:")]
pub enum Command {
    #[command(description = "показать кнопку лунных суток")]
    Start,
    #[command(description = "число пользователей")]
    Stats,
}

/// Dispatch tree: commands first, then the keyboard button text.
pub fn schema() -> UpdateHandler<BotError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.text() == Some(LUNAR_DAY_BUTTON))
                .endpoint(on_lunar_day),
        )
}

/// Run the long-polling dispatcher until the process is asked to stop.
pub async fn run_dispatcher(bot: Bot, state: Arc<AppState>) {
    info!("starting telegram dispatcher");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            debug!(id = ?update.id, "ignoring unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn on_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> Result<(), BotError> {
    let reply = match cmd {
        Command::Start => Reply::greeting(),
        Command::Stats => Reply::stats(state.registry().count()),
    };
    deliver(&bot, msg.chat.id, &reply).await?;
    Ok(())
}

async fn on_lunar_day(bot: Bot, msg: Message, state: Arc<AppState>) -> Result<(), BotError> {
    let reply = match state.reply_for(Utc::now()) {
        Ok(reply) => reply,
        Err(e) => {
            error!(chat = %msg.chat.id, error = %e, "lunar clock failed");
            Reply::apology()
        }
    };
    deliver(&bot, msg.chat.id, &reply).await?;

    if reply.counts_user {
        if let Some(user) = msg.from.as_ref() {
            if state.registry().record(user.id.0) {
                info!(user = user.id.0, "new user");
            }
        }
    }
    Ok(())
}

async fn deliver(bot: &Bot, chat: ChatId, reply: &Reply) -> Result<(), teloxide::RequestError> {
    for message in &reply.messages {
        match message {
            Outgoing::Text(text) => {
                bot.send_message(chat, text.as_str()).await?;
            }
            Outgoing::Html(text) => {
                bot.send_message(chat, text.as_str())
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
            Outgoing::WithKeyboard(text) => {
                bot.send_message(chat, text.as_str())
                    .reply_markup(lunar_day_keyboard())
                    .await?;
            }
            Outgoing::Photo { path, caption } => {
                bot.send_photo(chat, InputFile::file(path.clone()))
                    .caption(caption.as_str())
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
        }
    }
    Ok(())
}

fn lunar_day_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(LUNAR_DAY_BUTTON)]]).resize_keyboard()
}
