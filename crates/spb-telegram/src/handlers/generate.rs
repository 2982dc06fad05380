//! `/generate` — one remote call, one reply.

use spb_core::{domain::ChatId, formatting, messaging::types::ChatAction, Result};

use crate::router::AppState;

pub async fn run(state: &AppState, chat_id: ChatId) -> Result<()> {
    state
        .messenger
        .send_html(chat_id, formatting::working_message())
        .await?;
    // Typing indicator is cosmetic; delivery failures are ignored.
    let _ = state
        .messenger
        .send_chat_action(chat_id, ChatAction::Typing)
        .await;

    let reply = match state.planner.generate().await {
        Ok(schedule) => formatting::success_message(&schedule),
        Err(err) => formatting::failure_message(&err),
    };

    state.messenger.send_html(chat_id, &reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use spb_core::config::Config;
    use spb_core::domain::{MessageId, MessageRef};
    use spb_core::messaging::port::MessagingPort;
    use spb_core::schedule::{GenerateError, Schedule, SchedulePort};
    use spb_core::Result as CoreResult;

    #[derive(Default)]
    struct FakeMessenger {
        sends: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessagingPort for FakeMessenger {
        async fn send_html(&self, chat_id: ChatId, html: &str) -> CoreResult<MessageRef> {
            let mut sends = self.sends.lock().unwrap();
            sends.push(html.to_string());
            Ok(MessageRef {
                chat_id,
                message_id: MessageId(sends.len() as i32),
            })
        }

        async fn send_chat_action(&self, _chat_id: ChatId, _action: ChatAction) -> CoreResult<()> {
            Ok(())
        }
    }

    struct FakePlanner {
        outcome: std::result::Result<Schedule, GenerateError>,
        calls: Mutex<usize>,
    }

    impl FakePlanner {
        fn new(outcome: std::result::Result<Schedule, GenerateError>) -> Self {
            Self {
                outcome,
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl SchedulePort for FakePlanner {
        async fn generate(&self) -> std::result::Result<Schedule, GenerateError> {
            *self.calls.lock().unwrap() += 1;
            self.outcome.clone()
        }
    }

    fn test_state(messenger: Arc<FakeMessenger>, planner: Arc<FakePlanner>) -> AppState {
        AppState {
            cfg: Arc::new(Config {
                telegram_bot_token: "token".to_string(),
                edge_function_url: "http://localhost/functions/v1/generate".to_string(),
                supabase_jwt: "jwt".to_string(),
                telegram_allowed_users: Vec::new(),
                request_timeout: Duration::from_secs(30),
            }),
            planner,
            messenger,
        }
    }

    #[tokio::test]
    async fn sends_ack_then_success_summary_in_order() {
        let schedule = Schedule {
            sessions: vec![
                serde_json::json!(1),
                serde_json::json!(2),
                serde_json::json!(3),
            ],
            total_planned_hours: 12.25,
            utilization_rate: 87.333,
        };
        let messenger = Arc::new(FakeMessenger::default());
        let planner = Arc::new(FakePlanner::new(Ok(schedule)));
        let state = test_state(messenger.clone(), planner.clone());

        run(&state, ChatId(1)).await.unwrap();

        assert_eq!(*planner.calls.lock().unwrap(), 1);
        let sends = messenger.sends.lock().unwrap();
        assert_eq!(sends.len(), 2);
        assert_eq!(sends[0], formatting::working_message());
        assert!(sends[1].contains("Sessions: 3"));
        assert!(sends[1].contains("12.3 h"));
        assert!(sends[1].contains("87.3%"));
    }

    #[tokio::test]
    async fn service_failure_yields_exactly_one_error_reply() {
        let messenger = Arc::new(FakeMessenger::default());
        let planner = Arc::new(FakePlanner::new(Err(GenerateError::Service {
            message: "no tasks".to_string(),
        })));
        let state = test_state(messenger.clone(), planner);

        run(&state, ChatId(1)).await.unwrap();

        let sends = messenger.sends.lock().unwrap();
        assert_eq!(sends.len(), 2);
        assert!(sends[1].contains("no tasks"));
    }

    #[tokio::test]
    async fn timeout_never_reads_as_success() {
        let messenger = Arc::new(FakeMessenger::default());
        let planner = Arc::new(FakePlanner::new(Err(GenerateError::Timeout)));
        let state = test_state(messenger.clone(), planner);

        run(&state, ChatId(1)).await.unwrap();

        let sends = messenger.sends.lock().unwrap();
        assert_eq!(sends.len(), 2);
        assert!(sends[1].contains("timed out"));
        assert!(!sends[1].contains("Schedule created"));
    }

    #[tokio::test]
    async fn empty_schedule_reports_zeroes_without_fault() {
        let messenger = Arc::new(FakeMessenger::default());
        let planner = Arc::new(FakePlanner::new(Ok(Schedule::default())));
        let state = test_state(messenger.clone(), planner);

        run(&state, ChatId(1)).await.unwrap();

        let sends = messenger.sends.lock().unwrap();
        assert!(sends[1].contains("Sessions: 0"));
        assert!(sends[1].contains("0.0 h"));
        assert!(sends[1].contains("0.0%"));
    }
}
