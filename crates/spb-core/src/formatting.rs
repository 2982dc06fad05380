//! User-facing reply texts (Telegram HTML).

use crate::schedule::{GenerateError, Schedule};

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `/start` welcome text.
pub fn welcome_message() -> String {
    "🎓 <b>Welcome to the Study Planner Bot</b>\n\n\
I help you build a smart study schedule from your tasks and preferences ✨\n\n\
<b>📋 Available commands:</b>\n\n\
/generate - Generate a new study schedule\n\n\
🚀 Create your schedule now!"
        .to_string()
}

/// Acknowledgement sent before the remote call starts.
pub fn working_message() -> &'static str {
    "⏳ Generating your study schedule..."
}

/// Apology sent by the top-level supervisor when a handler faults.
pub fn apology_message() -> &'static str {
    "⚠️ An unexpected error occurred\nPlease try again"
}

/// One failure reply per classified error.
pub fn failure_message(err: &GenerateError) -> String {
    match err {
        // Business-level failures carry the service's own wording.
        GenerateError::Service { message } => {
            format!("❌ {}", escape_html(message))
        }
        other => format!("❌ An error occurred:\n{}", escape_html(&other.to_string())),
    }
}

/// Success summary: session count plus one-decimal hour and utilization figures.
pub fn success_message(schedule: &Schedule) -> String {
    format!(
        "✅ <b>Schedule created!</b>\n\n\
📊 <b>Statistics:</b>\n\
• Sessions: {}\n\
• Total hours: {:.1} h\n\
• Utilization: {:.1}%\n\n\
🎯 The schedule has been saved to the database",
        schedule.sessions.len(),
        round1(schedule.total_planned_hours),
        round1(schedule.utilization_rate)
    )
}

// Half-up at one decimal; `{:.1}` alone ties to even (12.25 -> "12.2").
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
