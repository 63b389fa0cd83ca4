pub mod lock_event_watcher;
pub mod parameter_store;
pub mod settings_validation_tester;
pub mod webhook_dispatcher;
pub mod webhook_url_builder;
