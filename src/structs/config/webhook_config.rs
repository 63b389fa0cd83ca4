use crate::enums::value_format::ValueFormat;
use crate::structs::extra_parameter::ExtraParameter;

/// Snapshot of the webhook settings, read fresh from the store per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub enabled: bool,
    pub base_url: String,
    pub status_param_name: String,
    pub status_format: ValueFormat,
    pub parameters: Vec<ExtraParameter>,
}
