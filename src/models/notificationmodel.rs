use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{chatmodels::ChatPartner, gigmodel::Gig, usermodel::UserRole};
use crate::router::screen::Screen;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Offer,
    Message,
    Completion,
    Review,
    Credit,
    Gig,
    Accepted,
}

impl NotificationKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            NotificationKind::Offer => "offer",
            NotificationKind::Message => "message",
            NotificationKind::Completion => "completion",
            NotificationKind::Review => "review",
            NotificationKind::Credit => "credit",
            NotificationKind::Gig => "gig",
            NotificationKind::Accepted => "accepted",
        }
    }
}

/// What tapping a notification does.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationAction {
    OpenGig { gig: Gig },
    OpenChat { other_user: ChatPartner, gig: Gig },
    OpenScreen { screen: Screen },
    ShowToast { message: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    /// `None` reaches every user of `audience`.
    pub recipient_id: Option<Uuid>,
    pub audience: UserRole,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub user_name: Option<String>,
    pub is_read: bool,
    pub action: Option<NotificationAction>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_for(&self, user_id: Uuid, role: UserRole) -> bool {
        self.audience == role && self.recipient_id.map_or(true, |id| id == user_id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NotificationSetting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
}

fn setting(id: &str, title: &str, description: &str, enabled: bool) -> NotificationSetting {
    NotificationSetting {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        enabled,
    }
}

pub fn default_settings(role: UserRole) -> Vec<NotificationSetting> {
    match role {
        UserRole::Customer => vec![
            setting("new-offers", "New Offers", "When professionals send offers on your gigs", true),
            setting("offer-updates", "Offer Updates", "When offers are modified or withdrawn", true),
            setting("messages", "Messages", "New messages from professionals", true),
            setting("job-completed", "Job Completed", "When a professional marks a job as complete", true),
            setting("reminders", "Reminders", "Reminders to leave reviews and follow up", false),
        ],
        UserRole::Labor => vec![
            setting("new-gigs", "New Gigs", "New gigs matching your skills", true),
            setting("offer-accepted", "Offer Accepted", "When a customer accepts your offer", true),
            setting("messages", "Messages", "New messages from customers", true),
            setting("reviews", "Reviews", "When customers leave you a review", true),
            setting("low-credits", "Low Credits", "When your credit balance is running low", true),
            setting("promotional", "Promotional", "Special offers and credit discounts", false),
        ],
        UserRole::Admin => Vec::new(),
    }
}
