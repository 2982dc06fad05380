use spb_core::{domain::ChatId, formatting, Result};

use crate::router::AppState;

use super::generate;

/// Split `/cmd@botname arg1 ...` into (command, rest).
fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(state: &AppState, chat_id: ChatId, text: &str) -> Result<()> {
    let (cmd, _args) = parse_command(text);

    match cmd.as_str() {
        "start" | "help" => {
            state
                .messenger
                .send_html(chat_id, &formatting::welcome_message())
                .await?;
            Ok(())
        }

        "generate" => generate::run(state, chat_id).await,

        _ => {
            state
                .messenger
                .send_html(chat_id, "Unknown command. Send /start for the list of commands.")
                .await?;
            Ok(())
        }
    }
}
