//! End-to-end tests for the publish pipeline: compose, publish, fan-out.

mod helpers;

use helpers::mock_delivery::{CountingSubscriber, FailingStrategy, RecordingStrategy};
use helpers::mock_transport::{FailingTransport, RecordingTransport};
use notibus::{
    app::App,
    config::{Config, EmailConfig, SmsConfig},
    content::{BasicNotification, SignatureDecorator, TimestampDecorator},
    service::NotificationService,
};
use std::sync::Arc;

fn test_config() -> Config {
    let mut config = Config::default();
    config.compose.signature = Some("Ops Team".to_string());
    config.delivery.email = Some(EmailConfig {
        enabled: true,
        address: "ops@example.com".to_string(),
    });
    config.delivery.sms = Some(SmsConfig {
        enabled: true,
        number: "+353 555 0100".to_string(),
    });
    config.delivery.popup.enabled = false;
    config
}

#[tokio::test]
async fn composed_content_reaches_every_channel() {
    let email_transport = Arc::new(RecordingTransport::new());
    let sms_transport = Arc::new(RecordingTransport::new());

    let app = App::builder(test_config())
        .with_email_transport(email_transport.clone())
        .with_sms_transport(sms_transport.clone())
        .with_fixed_timestamp("2025-10-26 10:45:00")
        .build();

    app.publish_message("Order shipped").await.unwrap();

    let expected = "[2025-10-26 10:45:00] Order shipped\n-- Ops Team\n\n";
    assert_eq!(
        email_transport.sent(),
        vec![("ops@example.com".to_string(), expected.to_string())]
    );
    assert_eq!(
        sms_transport.sent(),
        vec![("+353 555 0100".to_string(), expected.to_string())]
    );

    assert_eq!(app.logger().times_notified(), 1);
    assert_eq!(app.service().published_count(), 1);
    assert_eq!(app.service().hub().current_content().unwrap(), expected);
}

#[tokio::test]
async fn failing_email_does_not_block_sms() {
    let sms_transport = Arc::new(RecordingTransport::new());

    let app = App::builder(test_config())
        .with_email_transport(Arc::new(FailingTransport))
        .with_sms_transport(sms_transport.clone())
        .with_fixed_timestamp("2025-10-26 10:45:00")
        .build();

    app.publish_message("Order shipped").await.unwrap();

    // The publish itself succeeds; the failure stays inside the engine.
    let sent = sms_transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].1,
        "[2025-10-26 10:45:00] Order shipped\n-- Ops Team\n\n"
    );
}

#[tokio::test]
async fn no_channels_enabled_still_notifies_the_logger_once() {
    let mut config = Config::default();
    config.delivery.popup.enabled = false;

    let app = App::builder(config).build();
    assert_eq!(app.engine().strategy_count(), 0);

    app.publish_message("quiet").await.unwrap();

    assert_eq!(app.logger().times_notified(), 1);
    assert_eq!(app.service().published_count(), 1);
}

#[tokio::test]
async fn compose_flags_control_the_layers() {
    let mut config = Config::default();
    config.compose.timestamp = false;
    config.compose.signature = None;
    config.delivery.popup.enabled = false;

    let app = App::builder(config).build();
    app.publish_message("bare message").await.unwrap();

    assert_eq!(
        app.service().hub().current_content().unwrap(),
        "bare message"
    );
}

#[tokio::test]
async fn fan_out_invokes_each_strategy_exactly_once_per_publish() {
    let service = NotificationService::new();
    let engine = Arc::new(notibus::delivery::DispatchEngine::new());

    let ok = Arc::new(RecordingStrategy::new("ok"));
    let failing = Arc::new(FailingStrategy::new());
    let after = Arc::new(RecordingStrategy::new("after"));
    engine.add_strategy(ok.clone());
    engine.add_strategy(failing.clone());
    engine.add_strategy(after.clone());

    let extra_observer = Arc::new(CountingSubscriber::new());
    service.hub().subscribe(engine.clone());
    service.hub().subscribe(extra_observer.clone());

    let note = SignatureDecorator::new(
        TimestampDecorator::at(BasicNotification::new("Order shipped"), "2025-10-26 10:45:00"),
        "Ops Team",
    );
    service.publish(note).await.unwrap();
    service.publish(BasicNotification::new("second")).await.unwrap();

    assert_eq!(ok.delivered().len(), 2);
    assert_eq!(failing.attempts(), 2);
    assert_eq!(after.delivered().len(), 2);
    // Failed and successful strategies saw the same content.
    assert_eq!(ok.delivered(), after.delivered());
    assert_eq!(extra_observer.count(), 2);
}
