//! Error types for the Teams notification channel.

use thiserror::Error;

/// Errors that can occur when building or sending a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Webhook URL does not use the https scheme
    #[error("Invalid URL, must start with https://")]
    InvalidWebhookUrl,

    /// The webhook accepted the request but did not return the success signature
    #[error("An error occurred: {0}")]
    Delivery(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Required configuration is missing
    #[error("Channel not configured: {0}")]
    NotConfigured(String),
}
