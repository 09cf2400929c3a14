//! Notification parameters and their validation.
//!
//! The host automation tool collects these values however it likes (CLI
//! flags, pipeline config, environment variables); this module is the
//! structured form they arrive in. Validation is explicit and separate
//! from collection: call [`MessageParams::validate`] before sending.

use serde_json::Value;

use crate::error::NotifyError;

/// Environment variable for the notification title.
const ENV_TEAMS_TITLE: &str = "MS_TEAMS_TITLE";

/// Environment variable for the Teams incoming-webhook URL.
pub(crate) const ENV_TEAMS_URL: &str = "MS_TEAMS_URL";

/// Environment variable for the card sections (JSON array).
const ENV_TEAMS_SECTIONS: &str = "MS_TEAMS_SECTIONS";

/// Environment variable for the card action buttons (JSON array).
const ENV_TEAMS_ACTION: &str = "MS_TEAMS_ACTION";

/// Environment variable for the card theme color.
const ENV_TEAMS_THEME_COLOR: &str = "MS_TEAMS_THEME_COLOR";

/// Default MessageCard theme color (Microsoft blue).
pub const DEFAULT_THEME_COLOR: &str = "0078D7";

/// Parameters for a single Teams notification.
#[derive(Debug, Clone)]
pub struct MessageParams {
    /// Display title; also used as the card summary line.
    pub title: String,
    /// Card sections, passed through to the webhook verbatim.
    pub sections: Vec<Value>,
    /// Optional action buttons, passed through verbatim.
    pub potential_action: Option<Vec<Value>>,
    /// Hex theme color of the card.
    pub theme_color: String,
    /// Incoming-webhook URL. Sensitive: never logged.
    pub teams_url: String,
}

impl MessageParams {
    /// Create parameters with the required fields and defaults for the rest.
    #[must_use]
    pub fn new(title: impl Into<String>, teams_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: vec![],
            potential_action: None,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            teams_url: teams_url.into(),
        }
    }

    /// Set the card sections.
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Value>) -> Self {
        self.sections = sections;
        self
    }

    /// Set the card action buttons.
    #[must_use]
    pub fn with_potential_action(mut self, potential_action: Vec<Value>) -> Self {
        self.potential_action = Some(potential_action);
        self
    }

    /// Override the theme color.
    #[must_use]
    pub fn with_theme_color(mut self, theme_color: impl Into<String>) -> Self {
        self.theme_color = theme_color.into();
        self
    }

    /// Read parameters from `MS_TEAMS_*` environment variables.
    ///
    /// `MS_TEAMS_TITLE` and `MS_TEAMS_URL` are required; `MS_TEAMS_SECTIONS`
    /// and `MS_TEAMS_ACTION` hold JSON arrays when present.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotConfigured`] when a required variable is
    /// unset and [`NotifyError::Serialization`] when a JSON variable does
    /// not parse as an array.
    pub fn from_env() -> Result<Self, NotifyError> {
        let title = std::env::var(ENV_TEAMS_TITLE)
            .map_err(|_| NotifyError::NotConfigured(ENV_TEAMS_TITLE.to_string()))?;
        let teams_url = std::env::var(ENV_TEAMS_URL)
            .map_err(|_| NotifyError::NotConfigured(ENV_TEAMS_URL.to_string()))?;

        let mut params = Self::new(title, teams_url);

        if let Ok(raw) = std::env::var(ENV_TEAMS_SECTIONS) {
            params.sections = serde_json::from_str(&raw)?;
        }
        if let Ok(raw) = std::env::var(ENV_TEAMS_ACTION) {
            params.potential_action = Some(serde_json::from_str(&raw)?);
        }
        if let Ok(color) = std::env::var(ENV_TEAMS_THEME_COLOR) {
            params.theme_color = color;
        }

        Ok(params)
    }

    /// Check that the webhook URL is usable before any network attempt.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidWebhookUrl`] when the URL does not
    /// start with `https://`.
    pub fn validate(&self) -> Result<(), NotifyError> {
        if self.teams_url.starts_with("https://") {
            Ok(())
        } else {
            Err(NotifyError::InvalidWebhookUrl)
        }
    }
}
