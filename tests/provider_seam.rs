//! A custom response provider plugged into the engine from outside the crate

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use workbench_app::config::Settings;
use workbench_app::message::Message;
use workbench_app::{AssistantRequest, Engine, EngineEvent, ResponseProvider};
use workbench_core::{Error, MessagePhase, Result};

/// Fails the first call, then echoes the prompt and page
struct EchoAfterOutage {
    calls: AtomicUsize,
}

impl ResponseProvider for EchoAfterOutage {
    async fn respond(&self, request: &AssistantRequest) -> Result<String> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(Error::provider("backend offline"));
        }
        Ok(format!("{} @ {}", request.prompt, request.context.page))
    }
}

async fn settle(engine: &mut Engine<EchoAfterOutage>) {
    tokio::time::sleep(Duration::from_millis(150)).await;
    engine.drain_pending_messages();
}

#[tokio::test(start_paused = true)]
async fn test_failed_exchange_retries_in_place() {
    let provider = EchoAfterOutage {
        calls: AtomicUsize::new(0),
    };
    let mut engine = Engine::with_provider(Settings::default(), provider);
    let mut events = engine.subscribe();

    engine.process_message(Message::SubmitText("hero copy".into()));
    settle(&mut engine).await;

    let placeholder = engine.state.chat.messages()[1].clone();
    assert_eq!(placeholder.phase, MessagePhase::Failed);
    assert!(placeholder.text.contains("backend offline"));
    assert!(engine.state.chat.can_retry());

    engine.process_message(Message::RetryExchange);
    assert_eq!(engine.state.chat.messages()[1].phase, MessagePhase::Pending);
    settle(&mut engine).await;

    let messages = engine.state.chat.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].id, placeholder.id);
    assert_eq!(messages[1].phase, MessagePhase::Complete);
    assert_eq!(messages[1].text, "hero copy @ Home");

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event.event_type());
    }
    assert_eq!(
        seen,
        vec![
            "prompt_submitted",
            "reply_failed",
            "reply_retried",
            "reply_completed"
        ]
    );

    engine.shutdown().await;
    assert_eq!(engine.pending_task_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_emits_event_once() {
    let provider = EchoAfterOutage {
        calls: AtomicUsize::new(0),
    };
    let mut engine = Engine::with_provider(Settings::default(), provider);
    let mut events = engine.subscribe();

    engine.shutdown().await;
    engine.shutdown().await;

    assert!(matches!(events.try_recv(), Ok(EngineEvent::Shutdown)));
    assert!(events.try_recv().is_err());
}
