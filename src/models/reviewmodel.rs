use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub gig_id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub labor_id: Uuid,
    /// 1..=5 stars.
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn rating_label(&self) -> &'static str {
        match self.rating {
            5 => "Excellent!",
            4 => "Great!",
            3 => "Good",
            2 => "Fair",
            _ => "Poor",
        }
    }
}
