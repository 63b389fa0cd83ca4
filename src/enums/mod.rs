pub mod build_error;
pub mod commands;
pub mod dispatch_outcome;
pub mod lock_event;
pub mod lock_state;
pub mod value_format;
