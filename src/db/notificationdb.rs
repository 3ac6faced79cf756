// db/notificationdb.rs
use uuid::Uuid;

use super::db::DBClient;
use crate::models::{notificationmodel::*, usermodel::UserRole};
use crate::service::error::ServiceError;

pub trait NotificationExt {
    fn save_notification(&self, notification: Notification) -> Notification;

    /// Everything addressed to the user or broadcast to their role, newest first.
    fn get_notifications(&self, user_id: Uuid, role: UserRole) -> Vec<Notification>;

    fn get_notification(&self, notification_id: Uuid) -> Result<Notification, ServiceError>;

    fn mark_notification_read(&self, notification_id: Uuid) -> Result<Notification, ServiceError>;

    /// Returns how many were unread.
    fn mark_all_notifications_read(&self, user_id: Uuid, role: UserRole) -> usize;

    fn get_unread_count(&self, user_id: Uuid, role: UserRole) -> usize;

    /// The stored preferences, or the role defaults when none were saved.
    fn get_notification_settings(&self, user_id: Uuid, role: UserRole) -> Vec<NotificationSetting>;

    fn toggle_notification_setting(
        &self,
        user_id: Uuid,
        role: UserRole,
        setting_id: &str,
    ) -> Result<NotificationSetting, ServiceError>;
}

impl NotificationExt for DBClient {
    fn save_notification(&self, notification: Notification) -> Notification {
        self.notifications.borrow_mut().push(notification.clone());
        notification
    }

    fn get_notifications(&self, user_id: Uuid, role: UserRole) -> Vec<Notification> {
        let mut list: Vec<Notification> = self
            .notifications
            .borrow()
            .iter()
            .filter(|n| n.is_for(user_id, role))
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    fn get_notification(&self, notification_id: Uuid) -> Result<Notification, ServiceError> {
        self.notifications
            .borrow()
            .iter()
            .find(|n| n.id == notification_id)
            .cloned()
            .ok_or(ServiceError::NotificationNotFound(notification_id))
    }

    fn mark_notification_read(&self, notification_id: Uuid) -> Result<Notification, ServiceError> {
        let mut notifications = self.notifications.borrow_mut();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or(ServiceError::NotificationNotFound(notification_id))?;
        notification.is_read = true;
        Ok(notification.clone())
    }

    fn mark_all_notifications_read(&self, user_id: Uuid, role: UserRole) -> usize {
        let mut count = 0;
        for notification in self
            .notifications
            .borrow_mut()
            .iter_mut()
            .filter(|n| n.is_for(user_id, role) && !n.is_read)
        {
            notification.is_read = true;
            count += 1;
        }
        count
    }

    fn get_unread_count(&self, user_id: Uuid, role: UserRole) -> usize {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| n.is_for(user_id, role) && !n.is_read)
            .count()
    }

    fn get_notification_settings(&self, user_id: Uuid, role: UserRole) -> Vec<NotificationSetting> {
        self.notification_settings
            .borrow()
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| default_settings(role))
    }

    fn toggle_notification_setting(
        &self,
        user_id: Uuid,
        role: UserRole,
        setting_id: &str,
    ) -> Result<NotificationSetting, ServiceError> {
        let mut all = self.notification_settings.borrow_mut();
        let settings = all.entry(user_id).or_insert_with(|| default_settings(role));
        let setting = settings
            .iter_mut()
            .find(|s| s.id == setting_id)
            .ok_or_else(|| ServiceError::NotificationSettingNotFound(setting_id.to_string()))?;
        setting.enabled = !setting.enabled;
        Ok(setting.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn notification(recipient_id: Option<Uuid>, audience: UserRole, minutes_ago: i64) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            recipient_id,
            audience,
            kind: NotificationKind::Offer,
            title: "New Offer Received".to_string(),
            message: "Arben Hoxha sent you an offer".to_string(),
            user_name: Some("Arben Hoxha".to_string()),
            is_read: false,
            action: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn inbox_is_scoped_and_sorted() {
        let db = DBClient::new();
        let me = Uuid::new_v4();
        let old = db.save_notification(notification(None, UserRole::Customer, 60));
        let new = db.save_notification(notification(Some(me), UserRole::Customer, 5));
        db.save_notification(notification(Some(Uuid::new_v4()), UserRole::Customer, 1));
        db.save_notification(notification(None, UserRole::Labor, 1));

        let inbox = db.get_notifications(me, UserRole::Customer);
        assert_eq!(inbox.iter().map(|n| n.id).collect::<Vec<_>>(), vec![new.id, old.id]);
        assert_eq!(db.get_unread_count(me, UserRole::Customer), 2);
    }

    #[test]
    fn marking_read() {
        let db = DBClient::new();
        let me = Uuid::new_v4();
        let first = db.save_notification(notification(Some(me), UserRole::Labor, 3));
        db.save_notification(notification(Some(me), UserRole::Labor, 2));

        assert!(db.mark_notification_read(first.id).unwrap().is_read);
        assert_eq!(db.get_unread_count(me, UserRole::Labor), 1);
        assert_eq!(db.mark_all_notifications_read(me, UserRole::Labor), 1);
        assert_eq!(db.get_unread_count(me, UserRole::Labor), 0);
        assert!(db.mark_notification_read(Uuid::new_v4()).is_err());
    }

    #[test]
    fn settings_start_from_role_defaults() {
        let db = DBClient::new();
        let me = Uuid::new_v4();
        let before = db.get_notification_settings(me, UserRole::Labor);
        assert_eq!(before.len(), 6);

        let toggled = db.toggle_notification_setting(me, UserRole::Labor, "promotional").unwrap();
        assert!(toggled.enabled);
        assert!(db
            .get_notification_settings(me, UserRole::Labor)
            .iter()
            .all(|s| s.enabled));
        assert!(db.toggle_notification_setting(me, UserRole::Labor, "nope").is_err());
    }
}
