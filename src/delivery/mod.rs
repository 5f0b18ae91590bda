//! Handles the fan-out of published notifications to delivery channels.
//!
//! The dispatch engine is a plain hub subscriber; it holds the registered
//! channel strategies and invokes each of them with the published content.
//! Strategy failures are isolated: one unreachable channel never blocks the
//! others.
pub mod email;
pub mod engine;
pub mod popup;
pub mod sms;
pub mod transport;

pub use email::EmailStrategy;
pub use engine::DispatchEngine;
pub use popup::PopupStrategy;
pub use sms::SmsStrategy;
pub use transport::ConsoleTransport;
