use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use mockall::Sequence;
use lock_snitch::config::memory_store::MemoryStore;
use lock_snitch::config::toml_file_store::TomlFileStore;
use lock_snitch::enums::dispatch_outcome::DispatchOutcome;
use lock_snitch::enums::lock_event::LockEvent;
use lock_snitch::enums::lock_state::LockState;
use lock_snitch::enums::value_format::ValueFormat;
use lock_snitch::services::lock_event_watcher::LockEventWatcher;
use lock_snitch::services::parameter_store::ParameterStore;
use lock_snitch::structs::built_request::BuiltRequest;
use lock_snitch::structs::extra_parameter::ExtraParameter;
use lock_snitch::system::session_monitor::channel::ChannelEventSource;
use lock_snitch::traits::config_store::ConfigStore;
use lock_snitch::traits::webhook_sender::{MockWebhookSender, WebhookSender};

/// Keeps every fire-and-forget request in call order.
#[derive(Default)]
struct RecordingSender {
    requests: Mutex<Vec<BuiltRequest>>,
}

impl RecordingSender {
    fn urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|r| r.url.clone()).collect()
    }
}

#[async_trait]
impl WebhookSender for RecordingSender {
    async fn send(&self, _request: BuiltRequest) -> DispatchOutcome {
        DispatchOutcome::Success(200)
    }

    fn fire_and_forget(&self, request: BuiltRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

fn memory_parameters() -> ParameterStore {
    let parameters = ParameterStore::new(Arc::new(MemoryStore::new()));
    parameters.set_base_url("http://h:51828").unwrap();
    parameters
}

#[tokio::test]
async fn three_transitions_dispatch_in_order() {
    let mut sender = MockWebhookSender::new();
    let mut sequence = Sequence::new();
    for expected in ["state=true", "state=false", "state=true"] {
        sender
            .expect_fire_and_forget()
            .withf(move |request| {
                request.url == format!("http://h:51828?accessoryId=maclock&{}", expected)
                    && request.timeout == std::time::Duration::from_secs(5)
            })
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(());
    }

    let mut watcher = LockEventWatcher::new(memory_parameters(), Arc::new(sender));
    let mut source = ChannelEventSource::new();
    watcher.subscribe_to(&mut source).unwrap();
    let state = watcher.state();

    let running = tokio::spawn(watcher.run());
    source.emit(LockEvent::ScreenLocked).unwrap();
    source.emit(LockEvent::ScreenUnlocked).unwrap();
    source.emit(LockEvent::ScreenLocked).unwrap();
    source.close();

    running.await.unwrap();
    assert_eq!(*state.borrow(), LockState::Locked);
}

#[tokio::test]
async fn disabled_webhook_dispatches_nothing() {
    let parameters = memory_parameters();
    parameters.set_enabled(false).unwrap();

    let mut sender = MockWebhookSender::new();
    sender.expect_fire_and_forget().times(0);

    let mut watcher = LockEventWatcher::new(parameters, Arc::new(sender));
    let mut source = ChannelEventSource::new();
    watcher.subscribe_to(&mut source).unwrap();
    let state = watcher.state();

    let running = tokio::spawn(watcher.run());
    source.emit(LockEvent::ScreenLocked).unwrap();
    source.emit(LockEvent::ScreenUnlocked).unwrap();
    source.emit(LockEvent::ScreenLocked).unwrap();
    source.close();

    running.await.unwrap();
    assert_eq!(*state.borrow(), LockState::Locked);
}

#[test]
fn settings_changes_apply_to_the_next_event() {
    let parameters = memory_parameters();
    let sender = Arc::new(RecordingSender::default());
    let mut watcher = LockEventWatcher::new(parameters.clone(), sender.clone());

    watcher.handle_event(LockEvent::ScreenLocked);

    parameters.set_status_format(ValueFormat::Numeric).unwrap();
    parameters.set_status_param_name("locked").unwrap();
    parameters
        .save_parameters(&[ExtraParameter::new("", "draft"), ExtraParameter::new("room", "office")])
        .unwrap();
    watcher.handle_event(LockEvent::ScreenUnlocked);

    parameters.set_enabled(false).unwrap();
    watcher.handle_event(LockEvent::ScreenLocked);

    assert_eq!(
        sender.urls(),
        vec![
            "http://h:51828?accessoryId=maclock&state=true".to_string(),
            "http://h:51828?room=office&locked=0".to_string(),
        ]
    );
}

#[test]
fn edits_to_the_settings_file_are_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let parameters = ParameterStore::new(Arc::new(TomlFileStore::new(path.clone())));
    parameters.register_defaults().unwrap();
    parameters.set_base_url("http://h:51828").unwrap();

    let sender = Arc::new(RecordingSender::default());
    let mut watcher = LockEventWatcher::new(parameters, sender.clone());
    watcher.handle_event(LockEvent::ScreenLocked);

    // Another process rewrites the file between events.
    let writer = ParameterStore::new(Arc::new(TomlFileStore::new(path)));
    writer.set_base_url("http://other:8080/hook").unwrap();
    watcher.handle_event(LockEvent::ScreenUnlocked);

    assert_eq!(
        sender.urls(),
        vec![
            "http://h:51828?accessoryId=maclock&state=true".to_string(),
            "http://other:8080/hook?accessoryId=maclock&state=false".to_string(),
        ]
    );
}

#[test]
fn corrupt_parameter_list_still_dispatches_with_default_entry() {
    let store = Arc::new(MemoryStore::new());
    let parameters = ParameterStore::new(store.clone());
    parameters.set_base_url("http://h:51828").unwrap();
    store
        .set("webhookParameters", toml::Value::String("[{\"key\": 42".to_string()))
        .unwrap();

    let sender = Arc::new(RecordingSender::default());
    let mut watcher = LockEventWatcher::new(parameters, sender.clone());
    watcher.handle_event(LockEvent::ScreenLocked);
    watcher.handle_event(LockEvent::ScreenUnlocked);

    assert_eq!(sender.urls().len(), 2);
    assert!(sender.urls().iter().all(|url| url.contains("accessoryId=maclock")));
}
