//! Channel notification adapter - Implements NotificationPort over an mpsc queue
//!
//! The presentation layer owns the receiving half and decides how alerts are
//! surfaced (terminal banner, desktop notification, log line).

use application::{ApplicationError, NotificationPort, RainAlert};
use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, instrument};

/// Default number of undelivered alerts kept before new ones are rejected
pub const DEFAULT_ALERT_CAPACITY: usize = 16;

/// Delivers rain alerts into a bounded channel
#[derive(Debug, Clone)]
pub struct ChannelNotificationAdapter {
    sender: mpsc::Sender<RainAlert>,
}

impl ChannelNotificationAdapter {
    /// Create an adapter and the receiver that drains it
    #[must_use]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<RainAlert>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    /// Create with `DEFAULT_ALERT_CAPACITY`
    #[must_use]
    pub fn with_default_capacity() -> (Self, mpsc::Receiver<RainAlert>) {
        Self::new(DEFAULT_ALERT_CAPACITY)
    }
}

#[async_trait]
impl NotificationPort for ChannelNotificationAdapter {
    /// Never waits: a full queue rejects the alert instead of stalling the fetch
    #[instrument(skip(self, alert), fields(city = %alert.city))]
    async fn notify_rain(&self, alert: RainAlert) -> Result<(), ApplicationError> {
        match self.sender.try_send(alert) {
            Ok(()) => {
                debug!("Rain alert queued");
                Ok(())
            },
            Err(TrySendError::Full(_)) => Err(ApplicationError::ExternalService(
                "rain alert queue is full".to_string(),
            )),
            Err(TrySendError::Closed(_)) => Err(ApplicationError::Internal(
                "rain alert receiver dropped".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::Percentage;

    use super::*;

    fn alert(city: &str) -> RainAlert {
        RainAlert {
            city: city.to_string(),
            precipitation_probability: Percentage::clamped(80),
            description: "Rain".to_string(),
        }
    }

    #[tokio::test]
    async fn delivers_alert_to_receiver() {
        let (adapter, mut rx) = ChannelNotificationAdapter::new(4);
        adapter.notify_rain(alert("London")).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.city, "London");
        assert_eq!(received.precipitation_probability.value(), 80);
    }

    #[tokio::test]
    async fn preserves_order() {
        let (adapter, mut rx) = ChannelNotificationAdapter::new(4);
        adapter.notify_rain(alert("London")).await.unwrap();
        adapter.notify_rain(alert("Paris")).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().city, "London");
        assert_eq!(rx.recv().await.unwrap().city, "Paris");
    }

    #[tokio::test]
    async fn full_queue_rejects_without_blocking() {
        let (adapter, _rx) = ChannelNotificationAdapter::new(1);
        adapter.notify_rain(alert("London")).await.unwrap();

        let err = adapter.notify_rain(alert("Paris")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn closed_receiver_is_internal_error() {
        let (adapter, rx) = ChannelNotificationAdapter::new(1);
        drop(rx);

        let err = adapter.notify_rain(alert("London")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Internal(_)));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let (adapter, _rx) = ChannelNotificationAdapter::new(0);
        assert_eq!(adapter.sender.max_capacity(), 1);
    }
}
