//! Forwards macOS screen lock and unlock transitions to a webhook as HTTP GET
//! requests with configurable query parameters.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod system;
pub mod traits;
pub mod workers;
