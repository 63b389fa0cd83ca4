use dashmap::DashMap;
use crate::errors::LockSnitchResult;
use crate::traits::config_store::ConfigStore;

/// In-process settings, used for previews of unsaved values and in tests.
#[derive(Default)]
pub struct MemoryStore {
    values: DashMap<String, toml::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (String, toml::Value)>,
    {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> LockSnitchResult<Option<toml::Value>> {
        Ok(self.values.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: toml::Value) -> LockSnitchResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
