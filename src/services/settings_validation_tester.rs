use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use crate::enums::build_error::BuildError;
use crate::enums::dispatch_outcome::DispatchOutcome;
use crate::enums::lock_state::LockState;
use crate::enums::value_format::ValueFormat;
use crate::errors::{LockSnitchError, LockSnitchResult};
use crate::services::webhook_url_builder::WebhookUrlBuilder;
use crate::structs::built_request::BuiltRequest;
use crate::structs::extra_parameter::ExtraParameter;
use crate::traits::webhook_sender::WebhookSender;

/// Sends one request built from settings that may not be saved yet and
/// reports the outcome. The lock status is always sent as unlocked.
pub struct SettingsValidationTester {
    sender: Arc<dyn WebhookSender>,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SettingsValidationTester {
    pub fn new(sender: Arc<dyn WebhookSender>) -> Self {
        Self {
            sender,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_testing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fails with `TestInProgress` while an earlier call is still running.
    pub async fn test(
        &self,
        base_url: &str,
        parameters: &[ExtraParameter],
        status_param_name: &str,
        status_format: ValueFormat,
    ) -> LockSnitchResult<DispatchOutcome> {
        let _guard = self.acquire()?;

        let url = match WebhookUrlBuilder::build_for_state(
            base_url,
            parameters,
            status_param_name,
            status_format,
            LockState::Unlocked,
        ) {
            Ok(url) => url,
            Err(BuildError::InvalidBaseUrl { .. }) => {
                return Ok(DispatchOutcome::Failure("Invalid URL".to_string()));
            }
            Err(BuildError::UrlConstructionFailed { .. }) => {
                return Ok(DispatchOutcome::Failure("Failed to construct URL".to_string()));
            }
        };

        log::info!("🧪 Testing webhook: {}", url);
        Ok(self.sender.send(BuiltRequest::interactive(url)).await)
    }

    fn acquire(&self) -> LockSnitchResult<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard(&self.in_flight))
            .map_err(|_| LockSnitchError::TestInProgress)
    }
}
