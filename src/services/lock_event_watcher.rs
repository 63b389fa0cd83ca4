use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use crate::enums::lock_event::LockEvent;
use crate::enums::lock_state::LockState;
use crate::errors::{LockSnitchError, LockSnitchResult};
use crate::services::parameter_store::ParameterStore;
use crate::services::webhook_url_builder::WebhookUrlBuilder;
use crate::structs::built_request::BuiltRequest;
use crate::traits::lock_event_source::LockEventSource;
use crate::traits::webhook_sender::WebhookSender;

/// Owns the current lock state and turns each feed event into one
/// fire-and-forget webhook call.
///
/// Events are handled one at a time in arrival order by [`run`](Self::run).
/// Dispatches never block the loop.
pub struct LockEventWatcher {
    parameters: ParameterStore,
    sender: Arc<dyn WebhookSender>,
    state: watch::Sender<LockState>,
    last_event: Option<LockEvent>,
    events_tx: Option<UnboundedSender<LockEvent>>,
    events_rx: UnboundedReceiver<LockEvent>,
}

impl LockEventWatcher {
    pub fn new(parameters: ParameterStore, sender: Arc<dyn WebhookSender>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state, _) = watch::channel(LockState::default());

        Self {
            parameters,
            sender,
            state,
            last_event: None,
            events_tx: Some(events_tx),
            events_rx,
        }
    }

    /// Hands the event channel to `source`. Only one subscription is allowed
    /// per watcher.
    pub fn subscribe_to(&mut self, source: &mut dyn LockEventSource) -> LockSnitchResult<()> {
        let events_tx = self.events_tx.take().ok_or(LockSnitchError::AlreadySubscribed)?;
        source.subscribe(events_tx)?;
        log::info!("📡 Subscribed to screen lock events");
        Ok(())
    }

    pub fn state(&self) -> watch::Receiver<LockState> {
        self.state.subscribe()
    }

    pub fn current_state(&self) -> LockState {
        *self.state.borrow()
    }

    /// Consumes events until every sender is gone.
    pub async fn run(mut self) {
        // An unsubscribed watcher must not keep its own channel open.
        self.events_tx = None;

        while let Some(event) = self.events_rx.recv().await {
            self.handle_event(event);
        }

        log::info!("🛑 Lock event feed closed");
    }

    /// Applies one event. Returns whether a webhook call was started.
    pub fn handle_event(&mut self, event: LockEvent) -> bool {
        if self.last_event == Some(event) {
            log::debug!("Ignoring repeated {} notification", event.notification_name());
            return false;
        }
        self.last_event = Some(event);

        let state = event.resulting_state();
        self.state.send_replace(state);
        log::info!("{} Screen {}", state.emoji(), if state.is_locked() { "locked" } else { "unlocked" });

        self.forward(state)
    }

    fn forward(&self, state: LockState) -> bool {
        let config = match self.parameters.webhook_config() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Skipping webhook, settings unreadable: {}", e.user_message());
                return false;
            }
        };
        if !config.enabled {
            log::info!("⏸️ Webhook disabled");
            return false;
        }

        let url = match WebhookUrlBuilder::build_for_state(
            &config.base_url,
            &config.parameters,
            &config.status_param_name,
            config.status_format,
            state,
        ) {
            Ok(url) => url,
            Err(e) => {
                log::error!("❌ {}", LockSnitchError::from(e).user_message());
                return false;
            }
        };

        self.sender.fire_and_forget(BuiltRequest::live(url));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::memory_store::MemoryStore;
    use crate::config::toml_file_store::TomlFileStore;
    use crate::traits::webhook_sender::MockWebhookSender;

    fn watcher_with(sender: MockWebhookSender) -> LockEventWatcher {
        let parameters = ParameterStore::new(Arc::new(MemoryStore::new()));
        LockEventWatcher::new(parameters, Arc::new(sender))
    }

    #[test]
    fn starts_unlocked() {
        let watcher = watcher_with(MockWebhookSender::new());
        assert_eq!(watcher.current_state(), LockState::Unlocked);
    }

    #[test]
    fn repeated_event_is_coalesced() {
        let mut sender = MockWebhookSender::new();
        sender.expect_fire_and_forget().times(1).return_const(());
        let mut watcher = watcher_with(sender);

        assert!(watcher.handle_event(LockEvent::ScreenLocked));
        assert!(!watcher.handle_event(LockEvent::ScreenLocked));
        assert_eq!(watcher.current_state(), LockState::Locked);
    }

    #[test]
    fn first_unlock_still_dispatches() {
        let mut sender = MockWebhookSender::new();
        sender
            .expect_fire_and_forget()
            .withf(|request| request.url.ends_with("state=false"))
            .times(1)
            .return_const(());
        let mut watcher = watcher_with(sender);

        assert!(watcher.handle_event(LockEvent::ScreenUnlocked));
    }

    #[test]
    fn invalid_base_url_drops_the_event_but_updates_state() {
        let store = Arc::new(MemoryStore::new());
        let parameters = ParameterStore::new(store);
        parameters.set_base_url("").unwrap();

        let mut sender = MockWebhookSender::new();
        sender.expect_fire_and_forget().times(0);
        let mut watcher = LockEventWatcher::new(parameters, Arc::new(sender));

        assert!(!watcher.handle_event(LockEvent::ScreenLocked));
        assert_eq!(watcher.current_state(), LockState::Locked);
    }

    #[test]
    fn unreadable_settings_skip_the_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "webhookEnabled = false\nwebhookBaseURL = [\n").unwrap();
        let parameters = ParameterStore::new(Arc::new(TomlFileStore::new(path)));

        let mut sender = MockWebhookSender::new();
        sender.expect_fire_and_forget().times(0);
        let mut watcher = LockEventWatcher::new(parameters, Arc::new(sender));

        assert!(!watcher.handle_event(LockEvent::ScreenLocked));
        assert_eq!(watcher.current_state(), LockState::Locked);
    }

    #[test]
    fn second_subscription_is_rejected() {
        struct NullSource;
        impl LockEventSource for NullSource {
            fn subscribe(&mut self, _sender: UnboundedSender<LockEvent>) -> LockSnitchResult<()> {
                Ok(())
            }
        }

        let mut watcher = watcher_with(MockWebhookSender::new());
        watcher.subscribe_to(&mut NullSource).unwrap();
        assert_eq!(watcher.subscribe_to(&mut NullSource), Err(LockSnitchError::AlreadySubscribed));
    }
}
