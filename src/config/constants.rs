use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "lock-snitch";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const KEY_WEBHOOK_ENABLED: &str = "webhookEnabled";
pub const KEY_WEBHOOK_BASE_URL: &str = "webhookBaseURL";
pub const KEY_LOCK_STATUS_PARAM_NAME: &str = "lockStatusParamName";
pub const KEY_LOCK_STATUS_TYPE: &str = "lockStatusType";
pub const KEY_WEBHOOK_PARAMETERS: &str = "webhookParameters";

pub const SCALAR_SETTING_KEYS: &[&str] = &[
    KEY_WEBHOOK_ENABLED,
    KEY_WEBHOOK_BASE_URL,
    KEY_LOCK_STATUS_PARAM_NAME,
    KEY_LOCK_STATUS_TYPE,
];

pub const DEFAULT_WEBHOOK_ENABLED: bool = true;
pub const DEFAULT_WEBHOOK_BASE_URL: &str = "http://homebridge-ip:51828";
pub const DEFAULT_LOCK_STATUS_PARAM_NAME: &str = "state";
pub const DEFAULT_PARAMETER_KEY: &str = "accessoryId";
pub const DEFAULT_PARAMETER_VALUE: &str = "maclock";

pub const SCREEN_LOCKED_NOTIFICATION: &str = "com.apple.screenIsLocked";
pub const SCREEN_UNLOCKED_NOTIFICATION: &str = "com.apple.screenIsUnlocked";

pub const LIVE_DISPATCH_TIMEOUT_SECS: u64 = 5;
pub const TEST_DISPATCH_TIMEOUT_SECS: u64 = 10;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
