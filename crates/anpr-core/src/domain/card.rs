//! Office 365 connector MessageCard - the document posted to the incoming webhook.

use serde::{Deserialize, Serialize};

/// A connector card with a single fact section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    pub summary: String,
    pub title: String,
    pub text: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub sections: Vec<CardSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSection {
    pub start_group: bool,
    pub facts: Vec<Fact>,
}

/// A label/value row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

impl Fact {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Rendered values for one plate alert; absent values are passed as "".
#[derive(Debug, Clone, Copy)]
pub struct PlateCardFields<'a> {
    pub plate: &'a str,
    pub image_base64: &'a str,
    pub recorded_at: &'a str,
    pub camera_name: &'a str,
    pub alert_list: &'a str,
    pub description: &'a str,
    pub link: &'a str,
}

impl MessageCard {
    /// Build the plate notification card.
    pub fn plate_alert(fields: PlateCardFields<'_>) -> Self {
        Self {
            card_type: "MessageCard".to_string(),
            context: "https://schema.org/extensions".to_string(),
            summary: "Plate Notification".to_string(),
            title: format!("Plate {}", fields.plate),
            text: format!(
                "![Image of the number plate](data:image/png;base64,{})",
                fields.image_base64
            ),
            theme_color: "E81123".to_string(),
            sections: vec![CardSection {
                start_group: true,
                facts: vec![
                    Fact::new("Date Recorded:", fields.recorded_at),
                    Fact::new("Camera:", fields.camera_name),
                    Fact::new("Alert List:", fields.alert_list),
                    Fact::new("Alert Description:", fields.description),
                    Fact::new("Link:", format!("[Open in OpenANPR]({})", fields.link)),
                ],
            }],
        }
    }
}
