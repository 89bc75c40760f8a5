use crate::ports::notification_service::NotificationService;
use async_trait::async_trait;

/// Email notification that only writes the delivery to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotificationService;

/// SMS notification that only writes the delivery to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct SmsNotificationService;

/// Push notification that only writes the delivery to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct PushNotificationService;

#[async_trait]
impl NotificationService for EmailNotificationService {
    async fn send(&self, message: &str, recipient: &str) {
        tracing::info!(channel = self.channel_name(), to = recipient, "{}", message);
    }

    fn channel_name(&self) -> &'static str {
        "email"
    }
}

#[async_trait]
impl NotificationService for SmsNotificationService {
    async fn send(&self, message: &str, recipient: &str) {
        tracing::info!(channel = self.channel_name(), to = recipient, "{}", message);
    }

    fn channel_name(&self) -> &'static str {
        "sms"
    }
}

#[async_trait]
impl NotificationService for PushNotificationService {
    async fn send(&self, message: &str, recipient: &str) {
        tracing::info!(channel = self.channel_name(), to = recipient, "{}", message);
    }

    fn channel_name(&self) -> &'static str {
        "push"
    }
}
