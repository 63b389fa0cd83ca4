use std::sync::Arc;
use uuid::Uuid;
use crate::config::constants::{
    KEY_LOCK_STATUS_PARAM_NAME, KEY_LOCK_STATUS_TYPE, KEY_WEBHOOK_BASE_URL, KEY_WEBHOOK_ENABLED,
    KEY_WEBHOOK_PARAMETERS,
};
use crate::enums::value_format::ValueFormat;
use crate::errors::{LockSnitchError, LockSnitchResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::webhook_config::WebhookConfig;
use crate::structs::extra_parameter::ExtraParameter;
use crate::traits::config_store::ConfigStore;

/// Typed view over the raw settings store.
///
/// Nothing is cached here. Each accessor goes back to the store so a change
/// written between two lock events is picked up by the second one.
#[derive(Clone)]
pub struct ParameterStore {
    store: Arc<dyn ConfigStore>,
}

impl ParameterStore {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Writes defaults for the first-launch keys that are still absent.
    pub fn register_defaults(&self) -> LockSnitchResult<()> {
        if !self.store.contains(KEY_WEBHOOK_ENABLED)? {
            self.set_enabled(ConfigHelper::default_enabled())?;
        }
        if !self.store.contains(KEY_LOCK_STATUS_PARAM_NAME)? {
            self.set_status_param_name(&ConfigHelper::default_status_param_name())?;
        }
        if !self.store.contains(KEY_WEBHOOK_BASE_URL)? {
            self.set_base_url(&ConfigHelper::default_base_url())?;
        }
        Ok(())
    }

    pub fn is_enabled(&self) -> LockSnitchResult<bool> {
        Ok(self.read(KEY_WEBHOOK_ENABLED)?
            .and_then(|value| value.as_bool())
            .unwrap_or_else(ConfigHelper::default_enabled))
    }

    pub fn base_url(&self) -> LockSnitchResult<String> {
        Ok(self.read_string(KEY_WEBHOOK_BASE_URL)?
            .unwrap_or_else(ConfigHelper::default_base_url))
    }

    pub fn status_param_name(&self) -> LockSnitchResult<String> {
        Ok(self.read_string(KEY_LOCK_STATUS_PARAM_NAME)?
            .unwrap_or_else(ConfigHelper::default_status_param_name))
    }

    pub fn status_format(&self) -> LockSnitchResult<ValueFormat> {
        Ok(ValueFormat::from_stored(self.read_string(KEY_LOCK_STATUS_TYPE)?.as_deref()))
    }

    /// Stored parameter list, or the single example entry when the stored
    /// blob is missing or cannot be decoded. A settings file that cannot be
    /// read at all is still an error.
    pub fn parameters(&self) -> LockSnitchResult<Vec<ExtraParameter>> {
        match self.load_parameters() {
            Ok(Some(parameters)) => Ok(parameters),
            Ok(None) => Ok(ConfigHelper::default_parameters()),
            Err(e @ LockSnitchError::ConfigUnreadable { .. }) => {
                log::warn!("⚠️ {}", e.user_message());
                Ok(ConfigHelper::default_parameters())
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_parameters(&self) -> LockSnitchResult<Option<Vec<ExtraParameter>>> {
        let Some(value) = self.read(KEY_WEBHOOK_PARAMETERS)? else {
            return Ok(None);
        };

        let blob = value
            .as_str()
            .ok_or_else(|| LockSnitchError::config_unreadable(KEY_WEBHOOK_PARAMETERS, "expected a JSON string"))?;

        serde_json::from_str::<Vec<ExtraParameter>>(blob)
            .map(Some)
            .map_err(|e| LockSnitchError::config_unreadable(KEY_WEBHOOK_PARAMETERS, &e.to_string()))
    }

    pub fn webhook_config(&self) -> LockSnitchResult<WebhookConfig> {
        Ok(WebhookConfig {
            enabled: self.is_enabled()?,
            base_url: self.base_url()?,
            status_param_name: self.status_param_name()?,
            status_format: self.status_format()?,
            parameters: self.parameters()?,
        })
    }

    pub fn set_enabled(&self, enabled: bool) -> LockSnitchResult<()> {
        self.store.set(KEY_WEBHOOK_ENABLED, toml::Value::Boolean(enabled))
    }

    pub fn set_base_url(&self, base_url: &str) -> LockSnitchResult<()> {
        self.store.set(KEY_WEBHOOK_BASE_URL, toml::Value::String(base_url.to_string()))
    }

    pub fn set_status_param_name(&self, name: &str) -> LockSnitchResult<()> {
        self.store.set(KEY_LOCK_STATUS_PARAM_NAME, toml::Value::String(name.to_string()))
    }

    pub fn set_status_format(&self, format: ValueFormat) -> LockSnitchResult<()> {
        self.store.set(KEY_LOCK_STATUS_TYPE, toml::Value::String(format.as_str().to_string()))
    }

    pub fn save_parameters(&self, parameters: &[ExtraParameter]) -> LockSnitchResult<()> {
        let blob = serde_json::to_string(parameters)?;
        self.store.set(KEY_WEBHOOK_PARAMETERS, toml::Value::String(blob))
    }

    pub fn add_parameter(&self, key: &str, value: &str) -> LockSnitchResult<ExtraParameter> {
        let parameter = ExtraParameter::new(key, value);
        let mut parameters = self.parameters()?;
        parameters.push(parameter.clone());
        self.save_parameters(&parameters)?;
        Ok(parameter)
    }

    /// Removes the entry with `id`; returns whether one was found.
    pub fn remove_parameter(&self, id: Uuid) -> LockSnitchResult<bool> {
        let mut parameters = self.parameters()?;
        let before = parameters.len();
        parameters.retain(|parameter| parameter.id != id);

        if parameters.len() == before {
            return Ok(false);
        }

        self.save_parameters(&parameters)?;
        Ok(true)
    }

    /// Parses and stores one scalar setting given as text.
    pub fn set_from_str(&self, key: &str, value: &str) -> LockSnitchResult<()> {
        match key {
            KEY_WEBHOOK_ENABLED => {
                let enabled = value.parse::<bool>().map_err(|_| {
                    LockSnitchError::validation_error(key, value, "true or false", None)
                })?;
                self.set_enabled(enabled)
            }
            KEY_WEBHOOK_BASE_URL => self.set_base_url(value),
            KEY_LOCK_STATUS_PARAM_NAME => self.set_status_param_name(value),
            KEY_LOCK_STATUS_TYPE => self.set_status_format(value.parse()?),
            KEY_WEBHOOK_PARAMETERS => Err(LockSnitchError::validation_error(
                key,
                value,
                "not settable as text",
                Some("Use 'lock-snitch params add' and 'lock-snitch params remove'"),
            )),
            other => Err(LockSnitchError::validation_error(
                "key",
                other,
                "known setting",
                Some("Known settings: webhookEnabled, webhookBaseURL, lockStatusParamName, lockStatusType"),
            )),
        }
    }

    fn read(&self, key: &str) -> LockSnitchResult<Option<toml::Value>> {
        self.store.get(key)
    }

    fn read_string(&self, key: &str) -> LockSnitchResult<Option<String>> {
        Ok(self.read(key)?.and_then(|value| value.as_str().map(str::to_string)))
    }
}
