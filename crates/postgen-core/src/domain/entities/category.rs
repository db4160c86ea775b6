use serde::Serialize;

use crate::domain::value_objects::{DescriptionFormat, HexColor};

/// Emoji used when the configuration does not name one.
pub const DEFAULT_EMOJI: &str = "🌏";

/// Payload of a category's `description.<ext>` file.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescription {
    pub emoji: String,
    pub description: String,
    pub color: HexColor,
}

impl CategoryDescription {
    pub fn new(description: impl Into<String>, color: HexColor, emoji: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            description: description.into(),
            color,
        }
    }

    /// Compact JSON object: `{"emoji":…,"description":…,"color":…}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Description text followed by `color:` and `emoji:` lines.
    pub fn to_text(&self) -> String {
        format!(
            "{}\ncolor: {}\nemoji: {}\n",
            self.description, self.color, self.emoji
        )
    }

    pub fn render(&self, format: DescriptionFormat) -> serde_json::Result<String> {
        match format {
            DescriptionFormat::Json => self.to_json(),
            DescriptionFormat::Text => Ok(self.to_text()),
        }
    }
}
