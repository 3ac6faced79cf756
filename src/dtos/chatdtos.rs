use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{chatmodels::Message, usermodel::User};

/// Composer contents. Blank text with no image is dropped, not rejected.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SendMessageDto {
    pub text: String,
    pub image: Option<String>,
}

impl SendMessageDto {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), image: None }
    }

    pub fn into_message(self, sender: &User) -> Message {
        Message {
            id: Uuid::new_v4(),
            sender_id: sender.id,
            sender_name: sender.name.clone(),
            text: self.text.trim().to_string(),
            image: self.image,
            timestamp: Utc::now(),
        }
    }
}
