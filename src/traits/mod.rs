pub mod config_store;
pub mod lock_event_source;
pub mod webhook_sender;
