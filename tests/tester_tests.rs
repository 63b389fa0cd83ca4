use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Notify;
use lock_snitch::enums::dispatch_outcome::DispatchOutcome;
use lock_snitch::enums::value_format::ValueFormat;
use lock_snitch::errors::LockSnitchError;
use lock_snitch::services::settings_validation_tester::SettingsValidationTester;
use lock_snitch::services::webhook_dispatcher::WebhookDispatcher;
use lock_snitch::structs::built_request::BuiltRequest;
use lock_snitch::structs::extra_parameter::ExtraParameter;
use lock_snitch::traits::webhook_sender::WebhookSender;
use crate::common::serve_status;

/// Holds every `send` until released.
#[derive(Default)]
struct GatedSender {
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl WebhookSender for GatedSender {
    async fn send(&self, _request: BuiltRequest) -> DispatchOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        DispatchOutcome::Success(200)
    }

    fn fire_and_forget(&self, _request: BuiltRequest) {}
}

#[tokio::test]
async fn reports_server_error_status() {
    let (base, mut rx) = serve_status(500);
    let tester = SettingsValidationTester::new(Arc::new(WebhookDispatcher::new()));
    let parameters = vec![ExtraParameter::new("accessoryId", "maclock")];

    let outcome = tester.test(&base, &parameters, "state", ValueFormat::Boolean).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Failure("500".to_string()));
    assert_eq!(rx.recv().await.unwrap().query, "accessoryId=maclock&state=false");
}

#[tokio::test]
async fn reports_no_content_as_success() {
    let (base, mut rx) = serve_status(204);
    let tester = SettingsValidationTester::new(Arc::new(WebhookDispatcher::new()));

    let outcome = tester.test(&base, &[], "locked", ValueFormat::Numeric).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Success(204));
    assert_eq!(rx.recv().await.unwrap().query, "locked=0");
}

#[tokio::test]
async fn overlapping_test_is_rejected_until_the_first_finishes() {
    let sender = Arc::new(GatedSender::default());
    let tester = Arc::new(SettingsValidationTester::new(sender.clone()));

    let first = {
        let tester = Arc::clone(&tester);
        tokio::spawn(async move { tester.test("http://h:51828", &[], "state", ValueFormat::Boolean).await })
    };

    while !tester.is_testing() {
        tokio::task::yield_now().await;
    }

    let second = tester.test("http://h:51828", &[], "state", ValueFormat::Boolean).await;
    assert_eq!(second, Err(LockSnitchError::TestInProgress));

    sender.release.notify_one();
    assert_eq!(first.await.unwrap(), Ok(DispatchOutcome::Success(200)));
    assert!(!tester.is_testing());

    sender.release.notify_one();
    let third = tester.test("http://h:51828", &[], "state", ValueFormat::Boolean).await;
    assert_eq!(third, Ok(DispatchOutcome::Success(200)));
    assert_eq!(sender.calls.load(Ordering::SeqCst), 2);
}
