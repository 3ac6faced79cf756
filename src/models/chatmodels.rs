// models/chatmodels.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who the signed-in user is talking to, and about which gig.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatPartner {
    pub user_id: Uuid,
    pub user_name: String,
    pub gig_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sender_name: String,
    pub text: String,
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A conversation is identified by the gig plus the unordered pair of
/// participants.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationKey {
    pub gig_id: Uuid,
    low: Uuid,
    high: Uuid,
}

impl ConversationKey {
    pub fn new(gig_id: Uuid, a: Uuid, b: Uuid) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self { gig_id, low, high }
    }

    pub fn participants(&self) -> (Uuid, Uuid) {
        (self.low, self.high)
    }

    pub fn includes(&self, user_id: Uuid) -> bool {
        self.low == user_id || self.high == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_order_does_not_matter() {
        let gig = Uuid::new_v4();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(ConversationKey::new(gig, a, b), ConversationKey::new(gig, b, a));
        assert_ne!(ConversationKey::new(gig, a, b), ConversationKey::new(Uuid::new_v4(), a, b));
        assert!(ConversationKey::new(gig, a, b).includes(b));
    }
}
