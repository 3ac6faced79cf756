//! # Screens
//!
//! The closed set of screens and the identifier table that maps the string
//! vocabulary (`"gig-details"`, `"admin-audit-log"`, ...) onto them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::models::usermodel::UserRole;
use crate::router::admin::{AdminPage, PlaceholderPage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Onboarding,
    Auth,
    // Customer
    CustomerDashboard,
    CreateGig,
    GigDetails,
    LeaveReview,
    CustomerProfile,
    EditCustomerProfile,
    // Labor
    LaborDashboard,
    GigBrowser,
    SendOffer,
    LaborProfile,
    EditLaborProfile,
    // Shared by customers and professionals
    CreditManagement,
    NotificationInbox,
    Notifications,
    Chat,
    // Admin
    Admin(AdminPage),
    AdminPlaceholder(PlaceholderPage),
}

/// Who may open a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Anyone,
    Customer,
    Labor,
    Member,
    Admin,
}

impl Audience {
    pub fn admits(&self, role: Option<UserRole>) -> bool {
        match self {
            Audience::Anyone => true,
            Audience::Customer => role == Some(UserRole::Customer),
            Audience::Labor => role == Some(UserRole::Labor),
            Audience::Member => matches!(role, Some(UserRole::Customer | UserRole::Labor)),
            Audience::Admin => role == Some(UserRole::Admin),
        }
    }
}

impl Screen {
    const FIXED: [Screen; 17] = [
        Screen::Onboarding,
        Screen::Auth,
        Screen::CustomerDashboard,
        Screen::CreateGig,
        Screen::GigDetails,
        Screen::LeaveReview,
        Screen::CustomerProfile,
        Screen::EditCustomerProfile,
        Screen::LaborDashboard,
        Screen::GigBrowser,
        Screen::SendOffer,
        Screen::LaborProfile,
        Screen::EditLaborProfile,
        Screen::CreditManagement,
        Screen::NotificationInbox,
        Screen::Notifications,
        Screen::Chat,
    ];

    /// Every screen, admin pages and placeholders included.
    pub fn all() -> Vec<Screen> {
        Screen::FIXED
            .iter()
            .copied()
            .chain(AdminPage::all().into_iter().map(Screen::Admin))
            .chain(PlaceholderPage::all().iter().copied().map(Screen::AdminPlaceholder))
            .collect()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Auth => "auth",
            Screen::CustomerDashboard => "customer-dashboard",
            Screen::CreateGig => "create-gig",
            Screen::GigDetails => "gig-details",
            Screen::LeaveReview => "leave-review",
            Screen::CustomerProfile => "customer-profile",
            Screen::EditCustomerProfile => "edit-customer-profile",
            Screen::LaborDashboard => "labor-dashboard",
            Screen::GigBrowser => "gig-browser",
            Screen::SendOffer => "send-offer",
            Screen::LaborProfile => "labor-profile",
            Screen::EditLaborProfile => "edit-labor-profile",
            Screen::CreditManagement => "credit-management",
            Screen::NotificationInbox => "notification-inbox",
            Screen::Notifications => "notifications",
            Screen::Chat => "chat",
            Screen::Admin(page) => page.id(),
            Screen::AdminPlaceholder(page) => page.id(),
        }
    }

    /// Looks an identifier up in the screen table.
    pub fn from_id(id: &str) -> Option<Screen> {
        screen_table().get(id).copied()
    }

    /// Like `from_id`, but unknown identifiers land on onboarding.
    pub fn resolve(id: &str) -> Screen {
        Screen::from_id(id).unwrap_or_default()
    }

    pub fn audience(&self) -> Audience {
        match self {
            Screen::Onboarding | Screen::Auth => Audience::Anyone,
            Screen::CustomerDashboard
            | Screen::CreateGig
            | Screen::GigDetails
            | Screen::LeaveReview
            | Screen::CustomerProfile
            | Screen::EditCustomerProfile => Audience::Customer,
            Screen::LaborDashboard
            | Screen::GigBrowser
            | Screen::SendOffer
            | Screen::LaborProfile
            | Screen::EditLaborProfile => Audience::Labor,
            Screen::CreditManagement
            | Screen::NotificationInbox
            | Screen::Notifications
            | Screen::Chat => Audience::Member,
            Screen::Admin(_) | Screen::AdminPlaceholder(_) => Audience::Admin,
        }
    }

    /// Pages drawn inside the persistent admin layout.
    pub fn in_admin_shell(&self) -> bool {
        matches!(self, Screen::Admin(_))
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Onboarding | Screen::Auth)
    }

    pub fn dashboard_for(role: UserRole) -> Screen {
        match role {
            UserRole::Customer => Screen::CustomerDashboard,
            UserRole::Labor => Screen::LaborDashboard,
            UserRole::Admin => Screen::Admin(AdminPage::Dashboard),
        }
    }
}

fn screen_table() -> &'static HashMap<&'static str, Screen> {
    static TABLE: OnceLock<HashMap<&'static str, Screen>> = OnceLock::new();
    TABLE.get_or_init(|| Screen::all().into_iter().map(|s| (s.id(), s)).collect())
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown screen identifier: {0}")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::from_id(s).ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

impl Serialize for Screen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Screen {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}
