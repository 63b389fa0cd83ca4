use async_trait::async_trait;
use mockall::automock;
use crate::enums::dispatch_outcome::DispatchOutcome;
use crate::structs::built_request::BuiltRequest;

#[automock]
#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// Sends the request and waits for exactly one outcome.
    async fn send(&self, request: BuiltRequest) -> DispatchOutcome;

    /// Starts the request in the background and returns immediately.
    /// The outcome is only logged.
    fn fire_and_forget(&self, request: BuiltRequest);
}
