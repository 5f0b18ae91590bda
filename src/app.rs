//! The main application wiring, decoupled from the entry point.
//!
//! `AppBuilder` turns a `Config` into a ready-to-publish `App`: one
//! notification service, a logging subscriber, and a dispatch engine loaded
//! with the enabled channel strategies. The builder exposes override points
//! for the channel transports and the timestamp value so tests can inject
//! fakes and fixed clocks.

use crate::{
    config::Config,
    content::{BasicNotification, SignatureDecorator, TimestampDecorator},
    core::{HubError, Notification, Transport},
    delivery::{ConsoleTransport, DispatchEngine, EmailStrategy, PopupStrategy, SmsStrategy},
    hub::NotificationHub,
    logger::LoggingSubscriber,
    service::NotificationService,
};
use std::sync::Arc;
use tracing::info;

/// A fully wired application: service, logger, and dispatch engine.
pub struct App {
    config: Config,
    service: Arc<NotificationService>,
    engine: Arc<DispatchEngine>,
    logger: Arc<LoggingSubscriber>,
    fixed_timestamp: Option<String>,
}

impl App {
    /// Creates a new `AppBuilder` to construct an `App`.
    pub fn builder(config: Config) -> AppBuilder {
        AppBuilder::new(config)
    }

    pub fn service(&self) -> &Arc<NotificationService> {
        &self.service
    }

    pub fn engine(&self) -> &Arc<DispatchEngine> {
        &self.engine
    }

    pub fn logger(&self) -> &Arc<LoggingSubscriber> {
        &self.logger
    }

    /// Composes a notification from `message` per the compose settings and
    /// publishes it through the service.
    pub async fn publish_message(&self, message: &str) -> Result<(), HubError> {
        let mut notification: Box<dyn Notification> = Box::new(BasicNotification::new(message));

        if self.config.compose.timestamp {
            notification = match &self.fixed_timestamp {
                Some(ts) => Box::new(TimestampDecorator::at(notification, ts.clone())),
                None => Box::new(TimestampDecorator::new(notification)),
            };
        }

        if let Some(signature) = &self.config.compose.signature {
            notification = Box::new(SignatureDecorator::new(notification, signature.clone()));
        }

        self.service.publish(notification).await
    }
}

/// Builder for the main application.
///
/// This pattern allows for a clean separation of concerns between
/// constructing the application's components and running the application.
/// It also provides a convenient way to override components for testing
/// purposes.
pub struct AppBuilder {
    config: Config,
    email_transport_override: Option<Arc<dyn Transport>>,
    sms_transport_override: Option<Arc<dyn Transport>>,
    fixed_timestamp: Option<String>,
}

impl AppBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            email_transport_override: None,
            sms_transport_override: None,
            fixed_timestamp: None,
        }
    }

    /// Replaces the email channel's transport.
    pub fn with_email_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.email_transport_override = Some(transport);
        self
    }

    /// Replaces the SMS channel's transport.
    pub fn with_sms_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.sms_transport_override = Some(transport);
        self
    }

    /// Pins the timestamp layer to a fixed value instead of the wall clock.
    pub fn with_fixed_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.fixed_timestamp = Some(timestamp.into());
        self
    }

    /// Wires the service, logger, engine, and enabled strategies together.
    pub fn build(self) -> App {
        let hub = Arc::new(NotificationHub::new());
        let service = Arc::new(NotificationService::with_hub(hub));

        let logger = Arc::new(LoggingSubscriber::new());
        service.hub().subscribe(logger.clone());

        let engine = Arc::new(DispatchEngine::new());

        if let Some(email) = &self.config.delivery.email {
            if email.enabled {
                let transport = self
                    .email_transport_override
                    .unwrap_or_else(|| Arc::new(ConsoleTransport::new("email")));
                engine.add_strategy(Arc::new(EmailStrategy::new(email.address.clone(), transport)));
            }
        }

        if let Some(sms) = &self.config.delivery.sms {
            if sms.enabled {
                let transport = self
                    .sms_transport_override
                    .unwrap_or_else(|| Arc::new(ConsoleTransport::new("sms")));
                engine.add_strategy(Arc::new(SmsStrategy::new(sms.number.clone(), transport)));
            }
        }

        if self.config.delivery.popup.enabled {
            engine.add_strategy(Arc::new(PopupStrategy));
        }

        service.hub().subscribe(engine.clone());
        info!(
            channels = engine.strategy_count(),
            "notification pipeline assembled"
        );

        App {
            config: self.config,
            service,
            engine,
            logger,
            fixed_timestamp: self.fixed_timestamp,
        }
    }
}
