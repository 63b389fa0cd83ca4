use std::time::Duration;
use reqwest::Method;
use crate::config::constants::{timeout_duration, LIVE_DISPATCH_TIMEOUT_SECS, TEST_DISPATCH_TIMEOUT_SECS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub url: String,
    pub method: Method,
    pub timeout: Duration,
}

impl BuiltRequest {
    pub fn get(url: String, timeout: Duration) -> Self {
        Self {
            url,
            method: Method::GET,
            timeout,
        }
    }

    pub fn live(url: String) -> Self {
        Self::get(url, timeout_duration(LIVE_DISPATCH_TIMEOUT_SECS))
    }

    pub fn interactive(url: String) -> Self {
        Self::get(url, timeout_duration(TEST_DISPATCH_TIMEOUT_SECS))
    }
}
