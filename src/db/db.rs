// db/db.rs
use std::cell::RefCell;
use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{
    chatmodels::{ConversationKey, Message},
    creditmodel::CreditTransaction,
    gigmodel::Gig,
    notificationmodel::{Notification, NotificationSetting},
    reviewmodel::Review,
    usermodel::{ProfileDetails, User},
};

/// In-memory session store. Every table lives behind a `RefCell`; the whole
/// client is owned by one thread and handed around as `Rc<DBClient>`.
#[derive(Default)]
pub struct DBClient {
    pub(super) users: RefCell<HashMap<Uuid, User>>,
    pub(super) profiles: RefCell<HashMap<Uuid, ProfileDetails>>,
    /// Insertion order; listings reverse it so the newest gig comes first.
    pub(super) gigs: RefCell<Vec<Gig>>,
    pub(super) reviews: RefCell<Vec<Review>>,
    pub(super) conversations: RefCell<HashMap<ConversationKey, Vec<Message>>>,
    pub(super) notifications: RefCell<Vec<Notification>>,
    pub(super) notification_settings: RefCell<HashMap<Uuid, Vec<NotificationSetting>>>,
    pub(super) credit_transactions: RefCell<Vec<CreditTransaction>>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient")
            .field("users", &self.users.borrow().len())
            .field("gigs", &self.gigs.borrow().len())
            .field("reviews", &self.reviews.borrow().len())
            .field("conversations", &self.conversations.borrow().len())
            .field("notifications", &self.notifications.borrow().len())
            .finish()
    }
}

impl DBClient {
    pub fn new() -> Self {
        DBClient::default()
    }

    /// A client pre-filled with the demo accounts, gigs and inbox.
    pub fn seeded(default_location: &str) -> Self {
        let client = DBClient::new();
        super::seed::seed_demo_data(&client, default_location);
        tracing::info!("Seeded demo data: {:?}", client);
        client
    }
}
