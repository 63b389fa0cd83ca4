pub mod config_helper;
pub mod lock_status_formatter;
