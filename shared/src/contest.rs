//! Content contest: users post a meme or video about the app and send the link for review.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_http_url;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContestType {
    #[default]
    Meme,
    Youtube,
}

impl ContestType {
    pub const ALL: [ContestType; 2] = [ContestType::Meme, ContestType::Youtube];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Meme => "meme",
            Self::Youtube => "youtube",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Meme => "Create and share memes",
            Self::Youtube => "YouTube Bonanza",
        }
    }

    pub fn prize(&self) -> &'static str {
        match self {
            Self::Meme => "50,000 SATS",
            Self::Youtube => "500,000 SATS",
        }
    }

    pub fn mission(&self) -> &'static str {
        match self {
            Self::Meme => "Make a meme about the app and share it in Telegram crypto groups, then send us a link to the post.",
            Self::Youtube => "Talk about the app in a YouTube video or podcast, then send us the video link.",
        }
    }
}

#[derive(Debug, Serialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContestSubmission {
    pub contest_type: ContestType,
    #[validate(custom = "validate_http_url")]
    pub url: String,
}

impl ContestSubmission {
    pub fn new(contest_type: ContestType, url: &str) -> Self {
        Self {
            contest_type,
            url: url.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_needs_a_web_link() {
        let ok = ContestSubmission::new(ContestType::Youtube, "  https://youtu.be/abc123 ");
        assert!(ok.validate().is_ok());
        assert_eq!(ok.url, "https://youtu.be/abc123");

        let errors = ContestSubmission::new(ContestType::Meme, "t.me/somegroup/42")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
        assert!(ContestSubmission::new(ContestType::Meme, "").validate().is_err());
    }

    #[test]
    fn submission_wire_format() {
        let value =
            serde_json::to_value(ContestSubmission::new(ContestType::Meme, "http://example.com/m.png")).unwrap();
        assert_eq!(value["contestType"], "meme");
        assert_eq!(value["url"], "http://example.com/m.png");
    }
}
