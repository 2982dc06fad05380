use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use spb_core::{config::Config, messaging::port::MessagingPort, schedule::SchedulePort};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub planner: Arc<dyn SchedulePort>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, planner: Arc<dyn SchedulePort>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!("spb started: @{}", me.username());
    }
    if cfg.telegram_allowed_users.is_empty() {
        tracing::info!("no allowlist configured; bot is open to all users");
    } else {
        tracing::info!("allowed users: {}", cfg.telegram_allowed_users.len());
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        cfg,
        planner,
        messenger,
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
