//! MessageCard payload types.
//!
//! The wire format is the legacy Office 365 connector card schema:
//! <https://docs.microsoft.com/en-us/microsoftteams/platform/webhooks-and-connectors/how-to/connectors-using#example-connector-message>

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::MessageParams;

/// Fixed `@type` discriminator for connector cards.
const CARD_TYPE: &str = "MessageCard";

/// Fixed `@context` URI for connector cards.
const CARD_CONTEXT: &str = "http://schema.org/extensions";

/// A Teams connector MessageCard, built once per notification.
///
/// `summary` always mirrors `title`; `potentialAction` is serialized only
/// when the caller supplied a non-empty action list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    card_type: String,
    #[serde(rename = "@context")]
    context: String,
    #[serde(rename = "themeColor")]
    theme_color: String,
    title: String,
    summary: String,
    sections: Vec<Value>,
    #[serde(rename = "potentialAction", skip_serializing_if = "Option::is_none")]
    potential_action: Option<Vec<Value>>,
}

impl MessageCard {
    /// Build the card from validated parameters.
    #[must_use]
    pub fn from_params(params: &MessageParams) -> Self {
        Self {
            card_type: CARD_TYPE.to_string(),
            context: CARD_CONTEXT.to_string(),
            theme_color: params.theme_color.clone(),
            title: params.title.clone(),
            summary: params.title.clone(),
            sections: params.sections.clone(),
            potential_action: params
                .potential_action
                .as_ref()
                .filter(|actions| !actions.is_empty())
                .cloned(),
        }
    }

    /// The card title (and summary line).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The summary line shown in channel previews.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The hex theme color.
    #[must_use]
    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THEME_COLOR;
    use serde_json::json;

    fn params() -> MessageParams {
        MessageParams::new("Deploy complete", "https://example.com/webhook")
    }

    #[test]
    fn test_summary_mirrors_title() {
        let card = MessageCard::from_params(&params());
        assert_eq!(card.summary(), card.title());
        assert_eq!(card.title(), "Deploy complete");
    }

    #[test]
    fn test_theme_color_default_and_override() {
        let card = MessageCard::from_params(&params());
        assert_eq!(card.theme_color(), DEFAULT_THEME_COLOR);

        let card = MessageCard::from_params(&params().with_theme_color("FF0000"));
        assert_eq!(card.theme_color(), "FF0000");
    }

    #[test]
    fn test_potential_action_omitted_when_absent() {
        let value = serde_json::to_value(MessageCard::from_params(&params())).unwrap();
        assert!(value.get("potentialAction").is_none());
    }

    #[test]
    fn test_potential_action_omitted_when_empty() {
        let card = MessageCard::from_params(&params().with_potential_action(vec![]));
        let value = serde_json::to_value(card).unwrap();
        assert!(value.get("potentialAction").is_none());
    }

    #[test]
    fn test_potential_action_passed_through() {
        let action = json!({
            "@type": "OpenUri",
            "name": "Download",
            "targets": [{"os": "default", "uri": "https://app.download"}]
        });
        let card = MessageCard::from_params(&params().with_potential_action(vec![action.clone()]));
        let value = serde_json::to_value(card).unwrap();
        assert_eq!(value["potentialAction"], json!([action]));
    }

    #[test]
    fn test_wire_keys_exact() {
        let card = MessageCard::from_params(
            &params().with_sections(vec![json!({"activityTitle": "Build", "markdown": true})]),
        );
        let value = serde_json::to_value(&card).unwrap();
        let mut keys: Vec<&str> =
            value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected = ["@type", "@context", "themeColor", "title", "summary", "sections"];
        expected.sort_unstable();
        assert_eq!(keys, expected);
        assert_eq!(value["@type"], "MessageCard");
        assert_eq!(value["@context"], "http://schema.org/extensions");

        // Round-trip keeps the card intact.
        let text = serde_json::to_string(&card).unwrap();
        let back: MessageCard = serde_json::from_str(&text).unwrap();
        assert_eq!(back, card);
    }
}
