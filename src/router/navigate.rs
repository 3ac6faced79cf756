//! # Navigation
//!
//! `NavigateTo` names a destination together with everything that screen
//! needs, so a route that would reach a screen without its gig or chat
//! partner cannot be built. `NavPayload` is the loose, string-keyed form
//! deep links arrive in; it is folded into the held context and then lifted
//! into a `NavigateTo`.

use serde::{Deserialize, Serialize};

use crate::models::{chatmodels::ChatPartner, gigmodel::Gig, offermodel::Offer, usermodel::UserRole};
use crate::router::admin::{AdminPage, PlaceholderPage};
use crate::router::screen::Screen;
use crate::service::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum NavigateTo {
    #[default]
    Onboarding,
    Auth,
    CustomerDashboard,
    CreateGig,
    GigDetails { gig: Gig },
    LeaveReview { gig: Gig },
    CustomerProfile,
    EditCustomerProfile,
    LaborDashboard,
    GigBrowser,
    SendOffer { gig: Gig },
    LaborProfile,
    EditLaborProfile,
    CreditManagement,
    NotificationInbox,
    Notifications,
    Chat { gig: Gig, other_user: ChatPartner },
    Admin { page: AdminPage },
    AdminPlaceholder { page: PlaceholderPage },
}

impl NavigateTo {
    pub fn screen(&self) -> Screen {
        match self {
            NavigateTo::Onboarding => Screen::Onboarding,
            NavigateTo::Auth => Screen::Auth,
            NavigateTo::CustomerDashboard => Screen::CustomerDashboard,
            NavigateTo::CreateGig => Screen::CreateGig,
            NavigateTo::GigDetails { .. } => Screen::GigDetails,
            NavigateTo::LeaveReview { .. } => Screen::LeaveReview,
            NavigateTo::CustomerProfile => Screen::CustomerProfile,
            NavigateTo::EditCustomerProfile => Screen::EditCustomerProfile,
            NavigateTo::LaborDashboard => Screen::LaborDashboard,
            NavigateTo::GigBrowser => Screen::GigBrowser,
            NavigateTo::SendOffer { .. } => Screen::SendOffer,
            NavigateTo::LaborProfile => Screen::LaborProfile,
            NavigateTo::EditLaborProfile => Screen::EditLaborProfile,
            NavigateTo::CreditManagement => Screen::CreditManagement,
            NavigateTo::NotificationInbox => Screen::NotificationInbox,
            NavigateTo::Notifications => Screen::Notifications,
            NavigateTo::Chat { .. } => Screen::Chat,
            NavigateTo::Admin { page } => Screen::Admin(*page),
            NavigateTo::AdminPlaceholder { page } => Screen::AdminPlaceholder(*page),
        }
    }

    pub fn gig(&self) -> Option<&Gig> {
        match self {
            NavigateTo::GigDetails { gig }
            | NavigateTo::LeaveReview { gig }
            | NavigateTo::SendOffer { gig }
            | NavigateTo::Chat { gig, .. } => Some(gig),
            _ => None,
        }
    }

    pub fn dashboard_for(role: UserRole) -> NavigateTo {
        match role {
            UserRole::Customer => NavigateTo::CustomerDashboard,
            UserRole::Labor => NavigateTo::LaborDashboard,
            UserRole::Admin => NavigateTo::Admin { page: AdminPage::Dashboard },
        }
    }

    pub fn profile_for(role: UserRole) -> NavigateTo {
        match role {
            UserRole::Labor => NavigateTo::LaborProfile,
            _ => NavigateTo::CustomerProfile,
        }
    }

    /// Builds the route for `screen` from whatever context is held. Fails
    /// when the screen needs a gig or chat partner that is not there.
    pub fn from_context(screen: Screen, context: &NavContext) -> Result<NavigateTo, ServiceError> {
        let need_gig = || {
            context.gig.clone().ok_or(ServiceError::MissingContext { screen, missing: "gig" })
        };

        Ok(match screen {
            Screen::Onboarding => NavigateTo::Onboarding,
            Screen::Auth => NavigateTo::Auth,
            Screen::CustomerDashboard => NavigateTo::CustomerDashboard,
            Screen::CreateGig => NavigateTo::CreateGig,
            Screen::GigDetails => NavigateTo::GigDetails { gig: need_gig()? },
            Screen::LeaveReview => NavigateTo::LeaveReview { gig: need_gig()? },
            Screen::CustomerProfile => NavigateTo::CustomerProfile,
            Screen::EditCustomerProfile => NavigateTo::EditCustomerProfile,
            Screen::LaborDashboard => NavigateTo::LaborDashboard,
            Screen::GigBrowser => NavigateTo::GigBrowser,
            Screen::SendOffer => NavigateTo::SendOffer { gig: need_gig()? },
            Screen::LaborProfile => NavigateTo::LaborProfile,
            Screen::EditLaborProfile => NavigateTo::EditLaborProfile,
            Screen::CreditManagement => NavigateTo::CreditManagement,
            Screen::NotificationInbox => NavigateTo::NotificationInbox,
            Screen::Notifications => NavigateTo::Notifications,
            Screen::Chat => {
                let gig = need_gig()?;
                let other_user = context
                    .chat
                    .clone()
                    .ok_or(ServiceError::MissingContext { screen, missing: "chat partner" })?;
                NavigateTo::Chat { gig, other_user }
            }
            Screen::Admin(page) => NavigateTo::Admin { page },
            Screen::AdminPlaceholder(page) => NavigateTo::AdminPlaceholder { page },
        })
    }

    /// Where the back arrow leads. Dashboards and the public screens have
    /// nowhere to go back to.
    pub fn back(&self, role: Option<UserRole>) -> Option<NavigateTo> {
        let home = || role.map(NavigateTo::dashboard_for);
        match self {
            NavigateTo::Onboarding
            | NavigateTo::Auth
            | NavigateTo::CustomerDashboard
            | NavigateTo::LaborDashboard
            | NavigateTo::Admin { page: AdminPage::Dashboard } => None,
            NavigateTo::CreateGig
            | NavigateTo::GigDetails { .. }
            | NavigateTo::LeaveReview { .. }
            | NavigateTo::CustomerProfile => Some(NavigateTo::CustomerDashboard),
            NavigateTo::EditCustomerProfile => Some(NavigateTo::CustomerProfile),
            NavigateTo::GigBrowser | NavigateTo::LaborProfile => Some(NavigateTo::LaborDashboard),
            NavigateTo::SendOffer { .. } => Some(NavigateTo::GigBrowser),
            NavigateTo::EditLaborProfile => Some(NavigateTo::LaborProfile),
            NavigateTo::CreditManagement
            | NavigateTo::NotificationInbox
            | NavigateTo::Chat { .. } => home(),
            NavigateTo::Notifications => role.map(NavigateTo::profile_for),
            NavigateTo::Admin { .. } | NavigateTo::AdminPlaceholder { .. } => {
                Some(NavigateTo::Admin { page: AdminPage::Dashboard })
            }
        }
    }
}

/// Loose navigation payload as deep links and legacy call sites send it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavPayload {
    pub gig: Option<Gig>,
    pub offer: Option<Offer>,
    pub chat: Option<ChatPartner>,
    pub other_user: Option<ChatPartner>,
}

impl NavPayload {
    pub fn gig(gig: Gig) -> Self {
        Self { gig: Some(gig), ..Default::default() }
    }
}

/// Entities held for the screens that need them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavContext {
    pub gig: Option<Gig>,
    pub offer: Option<Offer>,
    pub chat: Option<ChatPartner>,
}

impl NavContext {
    /// Folds a payload in: each field present replaces the held one. When
    /// both `other_user` and `gig` arrive, `other_user` becomes the chat
    /// partner, overriding `chat`.
    pub fn apply(&mut self, payload: NavPayload) {
        let NavPayload { gig, offer, chat, other_user } = payload;
        let deep_link_partner = other_user.filter(|_| gig.is_some());

        if let Some(gig) = gig {
            self.gig = Some(gig);
        }
        if let Some(offer) = offer {
            self.offer = Some(offer);
        }
        if let Some(chat) = chat {
            self.chat = Some(chat);
        }
        if let Some(partner) = deep_link_partner {
            self.chat = Some(partner);
        }
    }

    /// Mirrors a typed route into the held context.
    pub fn absorb(&mut self, route: &NavigateTo) {
        if let Some(gig) = route.gig() {
            self.gig = Some(gig.clone());
        }
        if let NavigateTo::Chat { other_user, .. } = route {
            self.chat = Some(other_user.clone());
        }
    }

    pub fn clear(&mut self) {
        *self = NavContext::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gigmodel::sample_gig;
    use uuid::Uuid;

    fn partner(name: &str, gig_id: Uuid) -> ChatPartner {
        ChatPartner { user_id: Uuid::new_v4(), user_name: name.to_string(), gig_id }
    }

    #[test]
    fn every_screen_lifts_with_full_context() {
        let gig = sample_gig(Uuid::new_v4());
        let context = NavContext {
            chat: Some(partner("Arben Hoxha", gig.id)),
            gig: Some(gig),
            offer: None,
        };
        for screen in Screen::all() {
            let route = NavigateTo::from_context(screen, &context).unwrap();
            assert_eq!(route.screen(), screen);
        }
    }

    #[test]
    fn gig_screens_need_a_gig() {
        let empty = NavContext::default();
        for screen in [Screen::GigDetails, Screen::SendOffer, Screen::LeaveReview, Screen::Chat] {
            let err = NavigateTo::from_context(screen, &empty).unwrap_err();
            assert!(matches!(err, ServiceError::MissingContext { missing: "gig", .. }));
        }

        let gig_only = NavContext { gig: Some(sample_gig(Uuid::new_v4())), ..Default::default() };
        assert!(matches!(
            NavigateTo::from_context(Screen::Chat, &gig_only),
            Err(ServiceError::MissingContext { missing: "chat partner", .. })
        ));
    }

    #[test]
    fn deep_link_partner_overrides_chat_field() {
        let gig = sample_gig(Uuid::new_v4());
        let mut context = NavContext::default();
        context.apply(NavPayload {
            gig: Some(gig.clone()),
            chat: Some(partner("From chat", gig.id)),
            other_user: Some(partner("From deep link", gig.id)),
            offer: None,
        });
        assert_eq!(context.chat.as_ref().map(|c| c.user_name.as_str()), Some("From deep link"));
        assert_eq!(context.gig.as_ref().map(|g| g.id), Some(gig.id));
    }

    #[test]
    fn other_user_without_gig_is_ignored() {
        let mut context = NavContext::default();
        context.apply(NavPayload {
            other_user: Some(partner("Nobody", Uuid::new_v4())),
            ..Default::default()
        });
        assert_eq!(context.chat, None);
    }

    #[test]
    fn missing_fields_keep_held_context() {
        let gig = sample_gig(Uuid::new_v4());
        let mut context = NavContext::default();
        context.apply(NavPayload::gig(gig.clone()));
        context.apply(NavPayload::default());
        assert_eq!(context.gig, Some(gig));
    }

    #[test]
    fn back_targets_follow_role() {
        let labor = Some(UserRole::Labor);
        let customer = Some(UserRole::Customer);
        assert_eq!(NavigateTo::CreditManagement.back(labor), Some(NavigateTo::LaborDashboard));
        assert_eq!(NavigateTo::CreditManagement.back(customer), Some(NavigateTo::CustomerDashboard));
        assert_eq!(NavigateTo::Notifications.back(labor), Some(NavigateTo::LaborProfile));
        assert_eq!(NavigateTo::EditLaborProfile.back(labor), Some(NavigateTo::LaborProfile));
        assert_eq!(NavigateTo::CustomerDashboard.back(customer), None);
        assert_eq!(
            NavigateTo::AdminPlaceholder { page: PlaceholderPage::Disputes }.back(Some(UserRole::Admin)),
            Some(NavigateTo::Admin { page: AdminPage::Dashboard })
        );
    }
}
