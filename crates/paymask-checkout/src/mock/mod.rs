//! Mock collaborator implementations for testing and development.
//!
//! These stand in for the payment service and the notification surface and
//! can be controlled programmatically.

pub mod gateway;
pub mod notifier;

pub use gateway::{MockGateway, MockGatewayHandle};
pub use notifier::RecordingNotifier;
