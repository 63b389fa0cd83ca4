use crate::errors::LockSnitchResult;

/// Key/value persistence behind the settings.
///
/// Implementations must not cache: every `get` reflects the latest `set`,
/// including writes made by another process where the backend allows it.
pub trait ConfigStore: Send + Sync {
    fn get(&self, key: &str) -> LockSnitchResult<Option<toml::Value>>;

    fn set(&self, key: &str, value: toml::Value) -> LockSnitchResult<()>;

    fn contains(&self, key: &str) -> LockSnitchResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
