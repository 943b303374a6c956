//! Shopper notifications.

/// Sink for the toasts a submission raises.
///
/// A completed attempt raises exactly one notification, success or
/// failure. A submit rejected for being reentrant raises none.
pub trait NotificationService {
    /// Surface a success message to the shopper.
    fn notify_success(&self, message: &str);

    /// Surface an error message to the shopper.
    fn notify_error(&self, message: &str);
}

/// Routes notifications to the tracing pipeline. Render layers with a
/// real toast widget provide their own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationService for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!("notification: {}", message);
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!("notification: {}", message);
    }
}
