// service/notification_service.rs
use std::rc::Rc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::{db::DBClient, gigdb::GigExt, notificationdb::NotificationExt, userdb::UserExt},
    models::{
        chatmodels::ChatPartner, gigmodel::Gig, notificationmodel::*, offermodel::Offer,
        reviewmodel::Review, usermodel::*,
    },
    router::{navigate::NavPayload, screen::Screen},
    service::{error::ServiceError, require_role},
    utils::currency::format_lek,
};

/// Credits at or below this trigger a low-credit alert.
pub const LOW_CREDIT_THRESHOLD: u32 = 2;

/// What opening a notification leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum DeepLink {
    Navigate { screen: Screen, payload: NavPayload },
    Toast(String),
    Nothing,
}

impl From<Option<NotificationAction>> for DeepLink {
    fn from(action: Option<NotificationAction>) -> Self {
        match action {
            Some(NotificationAction::OpenGig { gig }) => DeepLink::Navigate {
                screen: Screen::GigDetails,
                payload: NavPayload::gig(gig),
            },
            Some(NotificationAction::OpenChat { other_user, gig }) => DeepLink::Navigate {
                screen: Screen::Chat,
                payload: NavPayload { gig: Some(gig), other_user: Some(other_user), ..Default::default() },
            },
            Some(NotificationAction::OpenScreen { screen }) => DeepLink::Navigate {
                screen,
                payload: NavPayload::default(),
            },
            Some(NotificationAction::ShowToast { message }) => DeepLink::Toast(message),
            None => DeepLink::Nothing,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationService {
    db_client: Rc<DBClient>,
}

impl NotificationService {
    pub fn new(db_client: Rc<DBClient>) -> Self {
        Self { db_client }
    }

    pub fn inbox(&self, user: &User) -> Result<Vec<Notification>, ServiceError> {
        let role = require_role(user)?;
        Ok(self.db_client.get_notifications(user.id, role))
    }

    pub fn unread_count(&self, user: &User) -> usize {
        match user.role {
            Some(role) => self.db_client.get_unread_count(user.id, role),
            None => 0,
        }
    }

    /// Marks the notification read and resolves where it leads.
    pub fn open(&self, user: &User, notification_id: Uuid) -> Result<DeepLink, ServiceError> {
        let role = require_role(user)?;
        let notification = self.db_client.get_notification(notification_id)?;
        if !notification.is_for(user.id, role) {
            return Err(ServiceError::NotificationNotFound(notification_id));
        }

        let notification = self.db_client.mark_notification_read(notification_id)?;
        tracing::debug!("Opened notification {} ({})", notification.id, notification.kind.to_str());
        Ok(DeepLink::from(notification.action))
    }

    pub fn mark_all_read(&self, user: &User) -> Result<usize, ServiceError> {
        let role = require_role(user)?;
        let count = self.db_client.mark_all_notifications_read(user.id, role);
        tracing::info!("Marked {} notifications read for user {}", count, user.id);
        Ok(count)
    }

    pub fn settings(&self, user: &User) -> Result<Vec<NotificationSetting>, ServiceError> {
        let role = require_role(user)?;
        Ok(self.db_client.get_notification_settings(user.id, role))
    }

    pub fn toggle_setting(&self, user: &User, setting_id: &str) -> Result<NotificationSetting, ServiceError> {
        let role = require_role(user)?;
        let setting = self.db_client.toggle_notification_setting(user.id, role, setting_id)?;
        tracing::info!(
            "User {} turned {} notifications {}",
            user.id,
            setting.id,
            if setting.enabled { "on" } else { "off" }
        );
        Ok(setting)
    }

    pub fn notify_new_offer(&self, gig: &Gig, offer: &Offer) -> Result<(), ServiceError> {
        tracing::info!("New offer notification: {} bid on gig {}", offer.labor_name, gig.id);
        self.store_notification(
            gig.customer_id,
            UserRole::Customer,
            "new-offers",
            NotificationKind::Offer,
            "New Offer Received".to_string(),
            format!(
                "{} sent you an offer for \"{}\" - {}",
                offer.labor_name,
                gig.title,
                format_lek(offer.price)
            ),
            Some(offer.labor_name.clone()),
            NotificationAction::OpenGig { gig: gig.clone() },
        )
    }

    pub fn notify_offer_accepted(&self, gig: &Gig, offer: &Offer) -> Result<(), ServiceError> {
        tracing::info!("Offer accepted notification: offer {} on gig {}", offer.id, gig.id);
        let customer = ChatPartner {
            user_id: gig.customer_id,
            user_name: gig.customer_name.clone(),
            gig_id: gig.id,
        };
        self.store_notification(
            offer.labor_id,
            UserRole::Labor,
            "offer-accepted",
            NotificationKind::Accepted,
            "Offer Accepted! 🎉".to_string(),
            format!("{} accepted your offer for \"{}\"", gig.customer_name, gig.title),
            Some(gig.customer_name.clone()),
            NotificationAction::OpenChat { other_user: customer, gig: gig.clone() },
        )
    }

    /// Tells the other side of the job that `by` marked it complete.
    pub fn notify_job_completed(&self, gig: &Gig, by: &User) -> Result<(), ServiceError> {
        let (recipient, audience, setting) = if by.id == gig.customer_id {
            match gig.accepted_offer() {
                // Laborers have no completion toggle; updates on hired work
                // follow "offer-accepted".
                Some(offer) => (offer.labor_id, UserRole::Labor, "offer-accepted"),
                None => return Ok(()),
            }
        } else {
            (gig.customer_id, UserRole::Customer, "job-completed")
        };

        tracing::info!("Job completion notification: gig {} completed by {}", gig.id, by.id);
        self.store_notification(
            recipient,
            audience,
            setting,
            NotificationKind::Completion,
            "Job Marked Complete".to_string(),
            format!("{} marked \"{}\" as complete", by.name, gig.title),
            Some(by.name.clone()),
            NotificationAction::ShowToast { message: "This job has been completed!".to_string() },
        )
    }

    pub fn notify_new_review(&self, gig: &Gig, review: &Review) -> Result<(), ServiceError> {
        tracing::info!("Review notification: {} stars for labor {}", review.rating, review.labor_id);
        self.store_notification(
            review.labor_id,
            UserRole::Labor,
            "reviews",
            NotificationKind::Review,
            "New Review Received".to_string(),
            format!(
                "{} left you a {}-star review on \"{}\": \"{}\"",
                review.customer_name, review.rating, gig.title, review.comment
            ),
            Some(review.customer_name.clone()),
            NotificationAction::ShowToast {
                message: "⭐ Great job! Keep up the excellent work.".to_string(),
            },
        )
    }

    pub fn notify_new_message(&self, sender: &User, recipient: &ChatPartner, text: &str) -> Result<(), ServiceError> {
        let Some(role) = self.db_client.get_user(recipient.user_id).and_then(|u| u.role) else {
            tracing::debug!("Skipping message notification for unknown user {}", recipient.user_id);
            return Ok(());
        };
        let gig = self.db_client.get_gig(recipient.gig_id)?;
        let reply_to = ChatPartner {
            user_id: sender.id,
            user_name: sender.name.clone(),
            gig_id: gig.id,
        };
        let first_name = sender.name.split_whitespace().next().unwrap_or(&sender.name);

        self.store_notification(
            recipient.user_id,
            role,
            "messages",
            NotificationKind::Message,
            "New Message".to_string(),
            format!("{}: \"{}\"", first_name, text),
            Some(sender.name.clone()),
            NotificationAction::OpenChat { other_user: reply_to, gig },
        )
    }

    pub fn notify_low_credits(&self, user: &User) -> Result<(), ServiceError> {
        let balance = user.credit_balance();
        if balance > LOW_CREDIT_THRESHOLD || !user.is_role(UserRole::Labor) {
            return Ok(());
        }
        tracing::warn!("User {} is low on credits ({})", user.id, balance);
        self.store_notification(
            user.id,
            UserRole::Labor,
            "low-credits",
            NotificationKind::Credit,
            "Low Credit Alert".to_string(),
            format!(
                "You have {} credit{} remaining. Top up to continue sending offers.",
                balance,
                if balance == 1 { "" } else { "s" }
            ),
            None,
            NotificationAction::OpenScreen { screen: Screen::CreditManagement },
        )
    }

    fn is_enabled(&self, user_id: Uuid, role: UserRole, setting_id: &str) -> bool {
        self.db_client
            .get_notification_settings(user_id, role)
            .iter()
            .find(|s| s.id == setting_id)
            .map_or(true, |s| s.enabled)
    }

    #[allow(clippy::too_many_arguments)]
    fn store_notification(
        &self,
        recipient_id: Uuid,
        audience: UserRole,
        setting_id: &str,
        kind: NotificationKind,
        title: String,
        message: String,
        user_name: Option<String>,
        action: NotificationAction,
    ) -> Result<(), ServiceError> {
        if !self.is_enabled(recipient_id, audience, setting_id) {
            tracing::debug!("User {} muted {} notifications", recipient_id, setting_id);
            return Ok(());
        }

        self.db_client.save_notification(Notification {
            id: Uuid::new_v4(),
            recipient_id: Some(recipient_id),
            audience,
            kind,
            title,
            message,
            user_name,
            is_read: false,
            action: Some(action),
            created_at: Utc::now(),
        });
        Ok(())
    }
}
