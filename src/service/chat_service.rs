// service/chat_service.rs
use std::rc::Rc;

use crate::{
    db::{chatdb::ChatExt, db::DBClient},
    dtos::chatdtos::SendMessageDto,
    models::{chatmodels::*, usermodel::User},
    service::{error::ServiceError, notification_service::NotificationService},
};

#[derive(Debug, Clone)]
pub struct ChatService {
    db_client: Rc<DBClient>,
    notification_service: Rc<NotificationService>,
}

impl ChatService {
    pub fn new(db_client: Rc<DBClient>, notification_service: Rc<NotificationService>) -> Self {
        Self { db_client, notification_service }
    }

    pub fn conversation(&self, user: &User, partner: &ChatPartner) -> Vec<Message> {
        self.db_client
            .get_messages(ConversationKey::new(partner.gig_id, user.id, partner.user_id))
    }

    /// Appends to the conversation. A message with neither text nor image is
    /// dropped and `None` comes back.
    pub fn send_message(
        &self,
        sender: &User,
        partner: &ChatPartner,
        dto: SendMessageDto,
    ) -> Result<Option<Message>, ServiceError> {
        if dto.text.trim().is_empty() && dto.image.is_none() {
            tracing::debug!("Ignoring blank message from {}", sender.id);
            return Ok(None);
        }

        let key = ConversationKey::new(partner.gig_id, sender.id, partner.user_id);
        let message = self.db_client.append_message(key, dto.into_message(sender));
        tracing::debug!("Message {} sent on gig {}", message.id, partner.gig_id);

        self.notification_service
            .notify_new_message(sender, partner, &message.text)?;
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{gigdb::GigExt, userdb::UserExt};
    use crate::models::gigmodel::sample_gig;
    use crate::models::usermodel::DemoAccount;

    #[test]
    fn both_sides_see_the_same_log() {
        let db = Rc::new(DBClient::new());
        let notifications = Rc::new(NotificationService::new(db.clone()));
        let chat = ChatService::new(db.clone(), notifications.clone());

        let customer = db.save_user(DemoAccount::Customer.user());
        let labor = db.save_user(DemoAccount::Professional.user());
        let gig = db.save_gig(sample_gig(customer.id));

        let to_labor = ChatPartner { user_id: labor.id, user_name: labor.name.clone(), gig_id: gig.id };
        let to_customer = ChatPartner { user_id: customer.id, user_name: customer.name.clone(), gig_id: gig.id };

        chat.send_message(&customer, &to_labor, SendMessageDto::text("Can you come at 3 PM?"))
            .unwrap();
        assert_eq!(chat.send_message(&labor, &to_customer, SendMessageDto::text("   ")).unwrap(), None);
        chat.send_message(&labor, &to_customer, SendMessageDto::text("Yes, see you then"))
            .unwrap();

        let seen_by_labor = chat.conversation(&labor, &to_customer);
        assert_eq!(seen_by_labor, chat.conversation(&customer, &to_labor));
        assert_eq!(seen_by_labor.len(), 2);
        assert_eq!(seen_by_labor[0].sender_id, customer.id);

        assert_eq!(notifications.unread_count(&labor), 1);
        assert_eq!(notifications.unread_count(&customer), 1);
    }
}
