use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use crate::enums::dispatch_outcome::DispatchOutcome;
use crate::structs::built_request::BuiltRequest;
use crate::traits::webhook_sender::WebhookSender;

/// Sends webhook requests over HTTP.
///
/// The per-request timeout on [`BuiltRequest`] is the hard upper bound; a
/// request that hits it resolves to a `Failure`.
#[derive(Clone, Default)]
pub struct WebhookDispatcher {
    client: Client,
}

impl WebhookDispatcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn describe(error: &reqwest::Error) -> String {
        if error.is_timeout() {
            return "request timed out".to_string();
        }
        if error.is_connect() {
            return match std::error::Error::source(error) {
                Some(source) => format!("could not connect: {}", source),
                None => "could not connect".to_string(),
            };
        }
        error.to_string()
    }
}

#[async_trait]
impl WebhookSender for WebhookDispatcher {
    async fn send(&self, request: BuiltRequest) -> DispatchOutcome {
        let response = self.client
            .request(request.method.clone(), &request.url)
            .timeout(request.timeout)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await;

        match response {
            Ok(response) => DispatchOutcome::from_status(response.status().as_u16()),
            Err(e) => DispatchOutcome::Failure(Self::describe(&e)),
        }
    }

    fn fire_and_forget(&self, request: BuiltRequest) {
        let dispatcher = self.clone();

        tokio::spawn(async move {
            let url = request.url.clone();
            match dispatcher.send(request).await {
                DispatchOutcome::Success(status) => {
                    log::info!("✅ Webhook sent: {} (HTTP {})", url, status);
                }
                failure => {
                    log::warn!("❌ Webhook failed for {}: {}", url, failure);
                }
            }
        });
    }
}
