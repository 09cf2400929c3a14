//! Microsoft Teams incoming-webhook notifications.
//!
//! This crate posts a formatted MessageCard to a Teams channel through an
//! incoming-webhook URL: build the JSON payload from caller-supplied
//! parameters, perform one HTTPS POST, and check the connector's strict
//! success signature (HTTP 200 with a body of `1`).
//!
//! # Usage
//!
//! ```no_run
//! use serde_json::json;
//! use teams_notify::MessageParams;
//!
//! # async fn example() -> Result<(), teams_notify::NotifyError> {
//! let params = MessageParams::new("Release 1.4.2", "https://outlook.office.com/webhook/...")
//!     .with_sections(vec![json!({
//!         "activityTitle": "Build pipeline",
//!         "activitySubtitle": "Version: 1.4.2",
//!         "markdown": true
//!     })])
//!     .with_potential_action(vec![json!({
//!         "@type": "OpenUri",
//!         "name": "Download",
//!         "targets": [{"os": "default", "uri": "https://app.download"}]
//!     })]);
//!
//! teams_notify::run(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Parameters can also come from environment variables via
//! [`MessageParams::from_env`]:
//!
//! - `MS_TEAMS_TITLE`: notification title (required)
//! - `MS_TEAMS_URL`: incoming-webhook URL (required, `https://` only)
//! - `MS_TEAMS_SECTIONS`: card sections as a JSON array
//! - `MS_TEAMS_ACTION`: action buttons as a JSON array
//! - `MS_TEAMS_THEME_COLOR`: hex theme color (default `0078D7`)
//!
//! # Architecture
//!
//! - [`MessageParams`] carries the caller's fields; [`MessageParams::validate`]
//!   rejects non-https webhook URLs before any network attempt.
//! - [`MessageCard`] is the serialized connector payload.
//! - [`NotifyChannel`] is the delivery seam; [`TeamsChannel`] implements it
//!   over the webhook.
//! - Failures are typed [`NotifyError`] values; the embedding application
//!   decides whether to halt, log, or retry.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod card;
pub mod channels;
pub mod config;
pub mod error;
pub mod helper;

pub use card::MessageCard;
pub use channels::teams::TeamsChannel;
pub use channels::NotifyChannel;
pub use config::{MessageParams, DEFAULT_THEME_COLOR};
pub use error::NotifyError;

/// Validate the parameters, build the card, and deliver it.
///
/// This is the whole plugin action: one outbound POST, no retries, no
/// state kept across calls.
///
/// # Errors
///
/// Returns [`NotifyError::InvalidWebhookUrl`] without touching the network
/// when the webhook URL is not https, [`NotifyError::Http`] on transport
/// failure, and [`NotifyError::Delivery`] when the connector does not answer
/// with its success signature.
pub async fn run(params: MessageParams) -> Result<(), NotifyError> {
    params.validate()?;

    let card = MessageCard::from_params(&params);
    let channel = TeamsChannel::new(params.teams_url.clone());

    channel.send(&card).await
}
