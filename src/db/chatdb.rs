// db/chatdb.rs
use uuid::Uuid;

use super::db::DBClient;
use crate::models::chatmodels::*;

pub trait ChatExt {
    fn append_message(&self, key: ConversationKey, message: Message) -> Message;

    /// Oldest first.
    fn get_messages(&self, key: ConversationKey) -> Vec<Message>;

    fn get_user_conversations(&self, user_id: Uuid) -> Vec<ConversationKey>;
}

impl ChatExt for DBClient {
    fn append_message(&self, key: ConversationKey, message: Message) -> Message {
        self.conversations
            .borrow_mut()
            .entry(key)
            .or_default()
            .push(message.clone());
        message
    }

    fn get_messages(&self, key: ConversationKey) -> Vec<Message> {
        self.conversations
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    fn get_user_conversations(&self, user_id: Uuid) -> Vec<ConversationKey> {
        let mut keys: Vec<ConversationKey> = self
            .conversations
            .borrow()
            .keys()
            .filter(|k| k.includes(user_id))
            .copied()
            .collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(sender_id: Uuid, text: &str) -> Message {
        Message {
            id: Uuid::new_v4(),
            sender_id,
            sender_name: "Arben".to_string(),
            text: text.to_string(),
            image: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn messages_append_in_order_per_conversation() {
        let db = DBClient::new();
        let (gig, a, b) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        db.append_message(ConversationKey::new(gig, a, b), message(a, "Hello"));
        db.append_message(ConversationKey::new(gig, b, a), message(b, "Hi"));
        db.append_message(ConversationKey::new(Uuid::new_v4(), a, b), message(a, "Other gig"));

        let texts: Vec<String> = db
            .get_messages(ConversationKey::new(gig, a, b))
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["Hello", "Hi"]);
        assert_eq!(db.get_user_conversations(b).len(), 2);
        assert!(db.get_user_conversations(Uuid::new_v4()).is_empty());
    }
}
