//! Telegram update handlers.
//!
//! The message entrypoint validates authorization, routes commands, and
//! supervises handler faults: an escaped error is logged and answered with
//! a single best-effort apology to the originating chat.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use spb_core::domain::{ChatId, UserId};
use spb_core::formatting;
use spb_core::security::is_authorized;

use crate::router::AppState;

mod commands;
mod generate;

pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);
    let user_id = msg.from().map(|u| UserId(u.id.0 as i64));

    if !is_authorized(user_id, &state.cfg.telegram_allowed_users) {
        let _ = bot
            .send_message(
                msg.chat.id,
                "Unauthorized. Contact the bot owner for access.",
            )
            .await;
        return Ok(());
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };
    if !text.starts_with('/') {
        return Ok(());
    }

    if let Err(e) = commands::handle_command(&state, chat_id, text).await {
        report_handler_error(&state, chat_id, &e).await;
    }

    Ok(())
}

/// Top-level supervisor: log the fault and best-effort notify the user.
/// A failure to deliver the apology is discarded; nothing propagates.
async fn report_handler_error(state: &AppState, chat_id: ChatId, err: &spb_core::Error) {
    tracing::error!("error while handling an update: {err}");
    let _ = state
        .messenger
        .send_html(chat_id, formatting::apology_message())
        .await;
}
