//! # Views
//!
//! What `AppState::render` hands to the presentation layer: one variant per
//! screen, carrying exactly the props that screen draws from.

use serde::Serialize;

use crate::dtos::{
    gigdtos::{CreateGigDto, GigFilterDto},
    offerdtos::SendOfferDto,
    userdtos::{EditLaborProfileDto, EditProfileDto},
};
use crate::models::{
    chatmodels::{ChatPartner, Message},
    creditmodel::{CreditPackage, CreditTransaction},
    gigmodel::{Gig, GigCategory},
    notificationmodel::{Notification, NotificationSetting},
    offermodel::Offer,
    reviewmodel::Review,
    usermodel::{DemoAccount, User},
};
use crate::router::admin::{AdminLayoutState, AdminPage, FeatureInfo, NavSection, PlaceholderPage};
use crate::service::profile_service::ProfileSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_gigs: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum View {
    Onboarding,
    Auth {
        demo_accounts: Vec<DemoAccount>,
    },
    CustomerDashboard {
        user: User,
        open_gigs: Vec<Gig>,
        in_progress_gigs: Vec<Gig>,
        past_gigs: Vec<Gig>,
        total_offers: usize,
        unread_notifications: usize,
    },
    CreateGig {
        user: User,
        form: CreateGigDto,
        categories: Vec<GigCategory>,
    },
    GigDetails {
        user: User,
        gig: Gig,
        /// Cheapest first.
        offers: Vec<Offer>,
        accepted_offer: Option<Offer>,
        review: Option<Review>,
    },
    LeaveReview {
        user: User,
        gig: Gig,
        labor_name: Option<String>,
    },
    CustomerProfile {
        user: User,
        profile: ProfileSummary,
        gigs_posted: usize,
    },
    EditCustomerProfile {
        user: User,
        form: EditProfileDto,
    },
    LaborDashboard {
        user: User,
        new_gigs: Vec<Gig>,
        my_offers: Vec<Offer>,
        active_jobs: Vec<Gig>,
        completed_jobs: Vec<Gig>,
        rating: Option<f32>,
        unread_notifications: usize,
    },
    GigBrowser {
        user: User,
        filter: GigFilterDto,
        gigs: Vec<Gig>,
    },
    SendOffer {
        user: User,
        gig: Gig,
        form: SendOfferDto,
        credit_cost: u32,
    },
    LaborProfile {
        user: User,
        profile: ProfileSummary,
    },
    EditLaborProfile {
        user: User,
        form: EditLaborProfileDto,
    },
    CreditManagement {
        user: User,
        packages: Vec<CreditPackage>,
        transactions: Vec<CreditTransaction>,
    },
    NotificationInbox {
        user: User,
        notifications: Vec<Notification>,
        unread_count: usize,
    },
    Notifications {
        user: User,
        settings: Vec<NotificationSetting>,
        enabled_count: usize,
    },
    Chat {
        user: User,
        gig: Gig,
        other_user: ChatPartner,
        messages: Vec<Message>,
    },
    /// A page inside the persistent admin layout.
    Admin {
        user: User,
        page: AdminPage,
        title: &'static str,
        layout: AdminLayoutState,
        sections: Vec<NavSection>,
        /// Set for the "coming soon" feature pages.
        feature: Option<FeatureInfo>,
        stats: Option<AdminStats>,
    },
    AdminPlaceholder {
        page: PlaceholderPage,
        title: String,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Onboarding => "onboarding",
            View::Auth { .. } => "auth",
            View::CustomerDashboard { .. } => "customer-dashboard",
            View::CreateGig { .. } => "create-gig",
            View::GigDetails { .. } => "gig-details",
            View::LeaveReview { .. } => "leave-review",
            View::CustomerProfile { .. } => "customer-profile",
            View::EditCustomerProfile { .. } => "edit-customer-profile",
            View::LaborDashboard { .. } => "labor-dashboard",
            View::GigBrowser { .. } => "gig-browser",
            View::SendOffer { .. } => "send-offer",
            View::LaborProfile { .. } => "labor-profile",
            View::EditLaborProfile { .. } => "edit-labor-profile",
            View::CreditManagement { .. } => "credit-management",
            View::NotificationInbox { .. } => "notification-inbox",
            View::Notifications { .. } => "notifications",
            View::Chat { .. } => "chat",
            View::Admin { page, .. } => page.id(),
            View::AdminPlaceholder { page, .. } => page.id(),
        }
    }
}
