//! Advertiser click campaigns: wire types and the create / increase-limit checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::TASKS_ENDPOINT;
use crate::format::format_pad;
use crate::models::{de_amount, de_id, AppSettings};
use crate::validation::{
    error_message, validate_http_url, validate_task_title, validate_telegram_link,
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[default]
    Channel,
    Bot,
    Link,
}

impl TaskType {
    pub const ALL: [TaskType; 3] = [TaskType::Channel, TaskType::Bot, TaskType::Link];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Channel => "Join channel",
            Self::Bot => "Start bot",
            Self::Link => "Visit link",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Bot => "bot",
            Self::Link => "link",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn needs_telegram_link(&self) -> bool {
        matches!(self, Self::Channel | Self::Bot)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Active,
    Paused,
    Completed,
    #[serde(rename = "under_review")]
    UnderReview,
}

impl TaskStatus {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::UnderReview => "under_review",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::UnderReview => "Under review",
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserTask {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub total_clicks_required: u32,
    #[serde(default)]
    pub current_clicks: u32,
    #[serde(default, deserialize_with = "de_amount")]
    pub reward: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub cost: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdvertiserTask {
    pub fn remaining_clicks(&self) -> u32 {
        self.total_clicks_required.saturating_sub(self.current_clicks)
    }

    pub fn progress_percent(&self) -> f64 {
        if self.total_clicks_required == 0 {
            return 0.0;
        }
        (f64::from(self.current_clicks) / f64::from(self.total_clicks_required) * 100.0).min(100.0)
    }

    pub fn is_finished(&self) -> bool {
        self.status == TaskStatus::Completed || self.remaining_clicks() == 0
    }

    pub fn can_pause(&self) -> bool {
        self.status == TaskStatus::Active && !self.is_finished()
    }

    pub fn can_resume(&self) -> bool {
        self.status == TaskStatus::Paused && !self.is_finished()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub link: String,
    pub task_type: TaskType,
    pub total_clicks_required: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseLimitRequest {
    pub additional_clicks: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyChannelRequest {
    pub channel_link: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyChannelResponse {
    pub success: bool,
    pub is_admin: bool,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HasClickedResponse {
    pub has_clicked: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskClickResponse {
    pub success: bool,
    #[serde(deserialize_with = "de_amount")]
    pub reward: f64,
    #[serde(deserialize_with = "de_amount")]
    pub new_balance: f64,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskFormError {
    Title(String),
    Link(String),
    TooFewClicks { minimum: u32, requested: u32 },
    InsufficientBalance { cost: f64, balance: f64 },
}

impl fmt::Display for TaskFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(msg) | Self::Link(msg) => f.write_str(msg),
            Self::TooFewClicks { minimum, .. } => {
                write!(f, "Minimum {} clicks required", minimum)
            }
            Self::InsufficientBalance { cost, balance } => write!(
                f,
                "Insufficient balance: this campaign costs {} PAD, you have {} PAD",
                format_pad(*cost),
                format_pad(*balance)
            ),
        }
    }
}

impl std::error::Error for TaskFormError {}

/// `/api/advertiser-tasks/:id`, optionally followed by an action segment.
pub fn task_endpoint(id: &str, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("{}/{}/{}", TASKS_ENDPOINT, id, action),
        None => format!("{}/{}", TASKS_ENDPOINT, id),
    }
}

pub fn task_cost(clicks: u32, settings: &AppSettings) -> f64 {
    f64::from(clicks) * settings.cost_per_click
}

fn check_clicks(clicks: u32, balance: f64, settings: &AppSettings) -> Result<(), TaskFormError> {
    if clicks < settings.minimum_clicks {
        return Err(TaskFormError::TooFewClicks {
            minimum: settings.minimum_clicks,
            requested: clicks,
        });
    }
    let cost = task_cost(clicks, settings);
    if balance < cost {
        return Err(TaskFormError::InsufficientBalance { cost, balance });
    }
    Ok(())
}

impl CreateTaskRequest {
    pub fn validate(&self, balance: f64, settings: &AppSettings) -> Result<(), TaskFormError> {
        validate_task_title(&self.title).map_err(|e| TaskFormError::Title(error_message(&e)))?;
        let link_check = if self.task_type.needs_telegram_link() {
            validate_telegram_link(&self.link)
        } else {
            validate_http_url(&self.link)
        };
        link_check.map_err(|e| TaskFormError::Link(error_message(&e)))?;
        check_clicks(self.total_clicks_required, balance, settings)
    }
}

impl IncreaseLimitRequest {
    pub fn validate(&self, balance: f64, settings: &AppSettings) -> Result<(), TaskFormError> {
        check_clicks(self.additional_clicks, balance, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AppSettings {
        AppSettings {
            minimum_clicks: 500,
            cost_per_click: 2.0,
            ..Default::default()
        }
    }

    fn request(clicks: u32) -> CreateTaskRequest {
        CreateTaskRequest {
            title: "Join Lightning Sats".into(),
            link: "https://t.me/LightingSats".into(),
            task_type: TaskType::Channel,
            total_clicks_required: clicks,
        }
    }

    #[test]
    fn task_endpoints() {
        assert_eq!(task_endpoint("42", Some("has-clicked")), "/api/advertiser-tasks/42/has-clicked");
        assert_eq!(task_endpoint("42", None), "/api/advertiser-tasks/42");
    }

    #[test]
    fn below_minimum_is_rejected() {
        let err = request(100).validate(1_000_000.0, &settings()).unwrap_err();
        assert_eq!(err, TaskFormError::TooFewClicks { minimum: 500, requested: 100 });
        assert_eq!(err.to_string(), "Minimum 500 clicks required");
    }

    #[test]
    fn cost_must_be_covered() {
        let err = request(500).validate(999.0, &settings()).unwrap_err();
        assert_eq!(err, TaskFormError::InsufficientBalance { cost: 1000.0, balance: 999.0 });
        assert!(request(500).validate(1000.0, &settings()).is_ok());
    }

    #[test]
    fn link_rules_depend_on_type() {
        let mut req = request(500);
        req.link = "https://example.com/landing".into();
        assert!(matches!(req.validate(10_000.0, &settings()), Err(TaskFormError::Link(_))));
        req.task_type = TaskType::Link;
        assert!(req.validate(10_000.0, &settings()).is_ok());
    }

    #[test]
    fn increase_limit_uses_same_floor() {
        let req = IncreaseLimitRequest { additional_clicks: 499 };
        assert!(req.validate(10_000.0, &settings()).is_err());
        let req = IncreaseLimitRequest { additional_clicks: 500 };
        assert!(req.validate(10_000.0, &settings()).is_ok());
    }

    #[test]
    fn task_progress() {
        let task: AdvertiserTask = serde_json::from_str(
            r#"{"id":"t1","title":"Sub","link":"https://t.me/x_channel","taskType":"channel",
                "status":"active","totalClicksRequired":500,"currentClicks":125,"reward":"15"}"#,
        )
        .unwrap();
        assert_eq!(task.remaining_clicks(), 375);
        assert_eq!(task.progress_percent(), 25.0);
        assert!(task.can_pause());
        assert!(!task.can_resume());
        assert_eq!(task.reward, 15.0);

        let numeric: AdvertiserTask = serde_json::from_str(r#"{"id":31,"title":"Bot"}"#).unwrap();
        assert_eq!(task_endpoint(&numeric.id, Some("click")), format!("{}/31/click", TASKS_ENDPOINT));
    }

    #[test]
    fn create_request_wire_format() {
        let value = serde_json::to_value(request(600)).unwrap();
        assert_eq!(value["taskType"], "channel");
        assert_eq!(value["totalClicksRequired"], 600);
    }
}
