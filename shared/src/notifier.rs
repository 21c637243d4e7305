//! Race alert formatting and delivery.

use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;

use crate::fallback::DATE_FORMAT;
use crate::models::Event;
use crate::{Error, Result};

/// Marker prefixed to the subject and the message.
pub const ALERT_MARKER: &str = "🏁";

/// A formatted alert, ready to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceAlert {
    pub subject: String,
    pub message: String,
}

impl RaceAlert {
    pub fn for_event(event: &Event) -> Self {
        Self {
            subject: format!("{} F1 Race Alert", ALERT_MARKER),
            message: format!(
                "{} Race this weekend: {} on {}",
                ALERT_MARKER,
                event.name,
                event.date.format(DATE_FORMAT)
            ),
        }
    }
}

/// Delivers alerts to a single destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, alert: &RaceAlert) -> Result<()>;
}

/// Publishes alerts to an SNS topic.
pub struct SnsNotifier {
    sns_client: SnsClient,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(sns_client: SnsClient, topic_arn: impl Into<String>) -> Self {
        Self {
            sns_client,
            topic_arn: topic_arn.into(),
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, alert: &RaceAlert) -> Result<()> {
        self.sns_client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(&alert.subject)
            .message(&alert.message)
            .send()
            .await
            .map_err(|e| Error::Aws(format!("Failed to publish to SNS: {}", e)))?;

        Ok(())
    }
}
