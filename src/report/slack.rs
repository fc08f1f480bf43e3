//! Slack incoming-webhook notification sink

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::report::table::render_table;
use crate::version::types::UpdateRecord;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Status code: {0}")]
    Status(u16),
}

/// Destination for the finished report
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the update records. Called once per run, after the scan.
    async fn notify(&self, records: &[UpdateRecord]) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize)]
struct SlackMessage {
    text: String,
}

/// Message text: heading plus the table in a code block
pub fn slack_message_text(records: &[UpdateRecord]) -> String {
    format!(
        "Composer Guardian found package updates:\n```{}```",
        render_table(records)
    )
}

/// Posts the report to a Slack incoming webhook
pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, records: &[UpdateRecord]) -> Result<(), NotifyError> {
        let message = SlackMessage {
            text: slack_message_text(records),
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status().as_u16()));
        }

        debug!("Sent {} updates to Slack", records.len());
        Ok(())
    }
}
