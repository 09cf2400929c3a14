//! Microsoft Teams incoming-webhook notification channel.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::card::MessageCard;
use crate::config::ENV_TEAMS_URL;
use crate::error::NotifyError;
use crate::NotifyChannel;

/// Microsoft Teams webhook notification channel.
pub struct TeamsChannel {
    webhook_url: Option<String>,
    client: reqwest::Client,
}

impl TeamsChannel {
    /// Create a Teams channel with a specific webhook URL.
    #[must_use]
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url: Some(webhook_url),
            client: reqwest::Client::new(),
        }
    }

    /// Create a new Teams channel from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let webhook_url = std::env::var(ENV_TEAMS_URL).ok();

        if webhook_url.is_some() {
            debug!("Teams notifications enabled");
        } else {
            debug!("Teams notifications disabled (MS_TEAMS_URL not set)");
        }

        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotifyChannel for TeamsChannel {
    fn name(&self) -> &'static str {
        "teams"
    }

    fn enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    async fn send(&self, card: &MessageCard) -> Result<(), NotifyError> {
        let webhook_url = self
            .webhook_url
            .as_ref()
            .ok_or_else(|| NotifyError::NotConfigured(ENV_TEAMS_URL.to_string()))?;

        debug!(channel = "teams", title = card.title(), "Sending notification");

        let response = self.client.post(webhook_url).json(card).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if is_success(status, &body) {
            debug!(channel = "teams", "Notification sent successfully");
            Ok(())
        } else {
            warn!(
                channel = "teams",
                status = %status,
                body = %body,
                "Teams webhook request failed"
            );

            Err(NotifyError::Delivery(body))
        }
    }
}

/// Strict success predicate of the legacy connector API: HTTP 200 with a
/// body that reads as the integer 1. A 200 with any other body is still a
/// delivery failure.
fn is_success(status: StatusCode, body: &str) -> bool {
    status == StatusCode::OK && leading_int(body) == 1
}

/// Interpret a response body as an integer: optional sign and leading
/// digits count, anything else reads as 0.
fn leading_int(body: &str) -> i64 {
    let trimmed = body.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<i64>().map_or(0, |n| sign * n)
}
