use crate::config::constants::{
    DEFAULT_LOCK_STATUS_PARAM_NAME, DEFAULT_PARAMETER_KEY, DEFAULT_PARAMETER_VALUE,
    DEFAULT_WEBHOOK_BASE_URL, DEFAULT_WEBHOOK_ENABLED,
};
use crate::structs::extra_parameter::ExtraParameter;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_enabled() -> bool {
        DEFAULT_WEBHOOK_ENABLED
    }

    pub fn default_base_url() -> String {
        DEFAULT_WEBHOOK_BASE_URL.to_string()
    }

    pub fn default_status_param_name() -> String {
        DEFAULT_LOCK_STATUS_PARAM_NAME.to_string()
    }

    pub fn default_parameters() -> Vec<ExtraParameter> {
        vec![ExtraParameter::new(DEFAULT_PARAMETER_KEY, DEFAULT_PARAMETER_VALUE)]
    }
}
