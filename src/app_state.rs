//! # Session store
//!
//! `AppState` is the single owner of everything the screens share: the
//! signed-in user, the current route, the entities held for screens that
//! need them, the admin sidebar and pending toasts. Screens never mutate
//! these directly; every change goes through one of the methods below.
//!
//! Failures are reported twice: the `Err` goes back to the caller and an
//! error toast is queued. Either way the store is left as it was.

use std::rc::Rc;

use uuid::Uuid;

use crate::{
    config::Config,
    db::{db::DBClient, gigdb::GigExt, reviewdb::ReviewExt, userdb::UserExt},
    dtos::{
        chatdtos::SendMessageDto,
        gigdtos::{CreateGigDto, GigFilterDto},
        offerdtos::SendOfferDto,
        reviewdtos::LeaveReviewDto,
        userdtos::{EditLaborProfileDto, EditProfileDto, SignInDto, SignUpDto},
    },
    error::Toast,
    models::{
        chatmodels::{ChatPartner, Message},
        gigmodel::{Gig, GigCategory, GigStatus},
        offermodel::Offer,
        reviewmodel::Review,
        usermodel::*,
    },
    router::{
        admin::{nav_sections, AdminLayoutState, AdminPage},
        bottom_nav::{BottomNav, Tab},
        navigate::{NavContext, NavPayload, NavigateTo},
        screen::Screen,
        view::{AdminStats, View},
    },
    service::{
        auth_service::AuthService,
        chat_service::ChatService,
        credit_service::CreditService,
        error::ServiceError,
        marketplace_service::MarketplaceService,
        notification_service::{DeepLink, NotificationService},
        profile_service::ProfileService,
    },
    utils::currency::format_lek,
};

#[derive(Debug)]
pub struct AppState {
    pub env: Config,
    db_client: Rc<DBClient>,
    auth_service: Rc<AuthService>,
    profile_service: Rc<ProfileService>,
    marketplace_service: Rc<MarketplaceService>,
    credit_service: Rc<CreditService>,
    chat_service: Rc<ChatService>,
    notification_service: Rc<NotificationService>,

    user: Option<User>,
    route: NavigateTo,
    context: NavContext,
    gig_filter: GigFilterDto,
    admin_layout: AdminLayoutState,
    toasts: Vec<Toast>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let db_client = if config.seed_demo_data {
            DBClient::seeded(&config.default_location)
        } else {
            DBClient::new()
        };
        AppState::with_db(db_client, config)
    }

    pub fn with_db(db_client: DBClient, config: Config) -> Self {
        let db_client = Rc::new(db_client);

        let notification_service = Rc::new(NotificationService::new(db_client.clone()));
        let credit_service = Rc::new(CreditService::new(db_client.clone()));
        let auth_service = Rc::new(AuthService::new(db_client.clone(), config.clone()));
        let profile_service = Rc::new(ProfileService::new(
            db_client.clone(),
            config.default_location.clone(),
        ));
        let chat_service = Rc::new(ChatService::new(
            db_client.clone(),
            notification_service.clone(),
        ));
        let marketplace_service = Rc::new(MarketplaceService::new(
            db_client.clone(),
            credit_service.clone(),
            notification_service.clone(),
            config.offer_credit_cost,
        ));

        AppState {
            env: config,
            db_client,
            auth_service,
            profile_service,
            marketplace_service,
            credit_service,
            chat_service,
            notification_service,
            user: None,
            route: NavigateTo::Onboarding,
            context: NavContext::default(),
            gig_filter: GigFilterDto::default(),
            admin_layout: AdminLayoutState::default(),
            toasts: Vec::new(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn route(&self) -> &NavigateTo {
        &self.route
    }

    pub fn screen(&self) -> Screen {
        self.route.screen()
    }

    pub fn context(&self) -> &NavContext {
        &self.context
    }

    pub fn admin_layout(&self) -> AdminLayoutState {
        self.admin_layout
    }

    pub fn gig_filter(&self) -> &GigFilterDto {
        &self.gig_filter
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    fn role(&self) -> Option<UserRole> {
        self.user.as_ref().and_then(|u| u.role)
    }

    fn current_user(&self) -> Result<User, ServiceError> {
        self.user.clone().ok_or(ServiceError::NotSignedIn)
    }

    /// Queues an error toast for a failed action and passes the result on.
    fn report<T>(&mut self, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
        if let Err(err) = &result {
            if err.is_user_input() {
                tracing::debug!("Rejected input on {}: {}", self.screen(), err);
            } else {
                tracing::warn!("Action failed on {}: {}", self.screen(), err);
            }
            self.toasts.push(Toast::from(err));
        }
        result
    }

    // ---- session ----

    pub fn complete_onboarding(&mut self) {
        tracing::debug!("Onboarding finished");
        self.route = NavigateTo::Auth;
    }

    /// Installs `user` as the session user and lands on their dashboard.
    pub fn login(&mut self, user: User) -> Result<(), ServiceError> {
        let result = user.role.ok_or(ServiceError::RoleRequired);
        let role = self.report(result)?;

        tracing::info!("{} signed in as {}", user.email, role.to_str());
        self.user = Some(user);
        self.context.clear();
        self.gig_filter = GigFilterDto::default();
        self.admin_layout = AdminLayoutState::default();
        self.route = NavigateTo::dashboard_for(role);
        Ok(())
    }

    pub fn sign_in(&mut self, dto: SignInDto) -> Result<(), ServiceError> {
        let result = self.auth_service.sign_in(dto);
        let user = self.report(result)?;
        self.login(user)
    }

    pub fn sign_up(&mut self, dto: SignUpDto) -> Result<(), ServiceError> {
        let result = self.auth_service.sign_up(dto);
        let user = self.report(result)?;
        self.toasts.push(Toast::success("Account created successfully!"));
        self.login(user)
    }

    pub fn google_sign_in(&mut self) -> Result<(), ServiceError> {
        let user = self.auth_service.google_sign_in();
        self.login(user)
    }

    pub fn demo_sign_in(&mut self, account: DemoAccount) -> Result<(), ServiceError> {
        let user = self.auth_service.demo_sign_in(account);
        self.login(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("{} signed out", user.email);
        }
        self.context.clear();
        self.gig_filter = GigFilterDto::default();
        self.admin_layout = AdminLayoutState::default();
        self.route = NavigateTo::Auth;
    }

    // ---- navigation ----

    /// Moves to `to` if the signed-in role may open it.
    pub fn navigate(&mut self, to: NavigateTo) -> Result<(), ServiceError> {
        let mut context = self.context.clone();
        context.absorb(&to);
        self.commit(to, context)
    }

    /// String-keyed navigation with a loose payload. The payload is folded
    /// into the held context first, so a screen can reuse a gig selected
    /// earlier. Unknown identifiers land on onboarding.
    pub fn navigate_raw(&mut self, screen_id: &str, payload: NavPayload) -> Result<(), ServiceError> {
        let screen = Screen::resolve(screen_id);
        if screen.id() != screen_id {
            tracing::warn!("Unknown screen {:?}, falling back to {}", screen_id, screen);
        }

        let mut context = self.context.clone();
        context.apply(payload);
        let result = NavigateTo::from_context(screen, &context);
        let to = self.report(result)?;
        self.commit(to, context)
    }

    fn commit(&mut self, to: NavigateTo, mut context: NavContext) -> Result<(), ServiceError> {
        let screen = to.screen();
        if !screen.audience().admits(self.role()) {
            return self.report(Err(ServiceError::UnauthorizedScreen { role: self.role(), screen }));
        }

        let to = self.refreshed(to);
        context.absorb(&to);

        if self.screen().in_admin_shell() && !screen.in_admin_shell() {
            self.admin_layout = AdminLayoutState::default();
        }

        tracing::debug!("Navigate {} -> {}", self.screen(), screen);
        self.route = to;
        self.context = context;
        Ok(())
    }

    /// Swaps a gig snapshot carried by a route for the stored copy so deep
    /// links never show stale offers or status.
    fn refreshed(&self, to: NavigateTo) -> NavigateTo {
        let fresh = |gig: Gig| self.marketplace_service.gig(gig.id).unwrap_or(gig);
        match to {
            NavigateTo::GigDetails { gig } => NavigateTo::GigDetails { gig: fresh(gig) },
            NavigateTo::LeaveReview { gig } => NavigateTo::LeaveReview { gig: fresh(gig) },
            NavigateTo::SendOffer { gig } => NavigateTo::SendOffer { gig: fresh(gig) },
            NavigateTo::Chat { gig, other_user } => NavigateTo::Chat { gig: fresh(gig), other_user },
            other => other,
        }
    }

    pub fn back(&mut self) -> Result<(), ServiceError> {
        match self.route.back(self.role()) {
            Some(target) => self.navigate(target),
            None => Ok(()),
        }
    }

    pub fn bottom_nav(&self) -> Option<BottomNav> {
        BottomNav::for_screen(self.screen(), self.role())
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), ServiceError> {
        let result = self.role().ok_or(ServiceError::NotSignedIn);
        let role = self.report(result)?;
        self.navigate(tab.target(role))
    }

    pub fn set_gig_filter(&mut self, search: &str, category: Option<GigCategory>) {
        self.gig_filter = GigFilterDto { search: search.to_string(), category };
    }

    // ---- admin shell ----

    pub fn select_admin_page(&mut self, page: AdminPage) -> Result<(), ServiceError> {
        self.navigate(NavigateTo::Admin { page })?;
        self.admin_layout.on_item_selected();
        Ok(())
    }

    pub fn toggle_admin_sidebar(&mut self) {
        if self.screen().in_admin_shell() {
            self.admin_layout.toggle_sidebar();
        }
    }

    pub fn set_admin_mobile_menu(&mut self, open: bool) {
        if self.screen().in_admin_shell() {
            self.admin_layout.set_mobile_menu(open);
        }
    }

    // ---- marketplace ----

    pub fn create_gig(&mut self, dto: CreateGigDto) -> Result<Gig, ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.marketplace_service.create_gig(&user, dto));
        let gig = self.report(result)?;

        self.toasts.push(Toast::success("Gig posted successfully!"));
        self.navigate(NavigateTo::CustomerDashboard)?;
        Ok(gig)
    }

    /// Debits the offer cost and returns to the dashboard. On any failure,
    /// short balance included, the route stays on send-offer.
    pub fn send_offer(&mut self, gig_id: Uuid, dto: SendOfferDto) -> Result<Offer, ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.marketplace_service.send_offer(&user, gig_id, dto));
        let sent = self.report(result)?;

        self.user = Some(sent.labor);
        self.toasts.push(
            Toast::success("Offer sent successfully!")
                .with_description(format!("{} for \"{}\"", format_lek(sent.offer.price), sent.gig.title)),
        );
        self.navigate(NavigateTo::LaborDashboard)?;
        Ok(sent.offer)
    }

    /// Accepting opens the chat with the chosen professional.
    pub fn accept_offer(&mut self, gig_id: Uuid, offer_id: Uuid) -> Result<(), ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.marketplace_service.accept_offer(&user, gig_id, offer_id));
        let (gig, offer) = self.report(result)?;

        self.context.offer = Some(offer.clone());
        self.toasts.push(Toast::success("Offer accepted!").with_description(format!(
            "You can now chat with {}",
            offer.labor_name
        )));
        let other_user = ChatPartner {
            user_id: offer.labor_id,
            user_name: offer.labor_name,
            gig_id: gig.id,
        };
        self.navigate(NavigateTo::Chat { gig, other_user })
    }

    pub fn reject_offer(&mut self, gig_id: Uuid, offer_id: Uuid) -> Result<(), ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.marketplace_service.reject_offer(&user, gig_id, offer_id));
        let gig = self.report(result)?;

        self.toasts.push(Toast::info("Offer declined"));
        self.navigate(NavigateTo::GigDetails { gig })
    }

    /// The customer goes on to review the job; the professional returns to
    /// their dashboard.
    pub fn mark_complete(&mut self, gig_id: Uuid) -> Result<(), ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.marketplace_service.mark_complete(&user, gig_id).map(|gig| (user, gig)));
        let (user, gig) = self.report(result)?;

        self.toasts.push(Toast::success("Job marked as complete"));
        if user.is_role(UserRole::Customer) {
            self.navigate(NavigateTo::LeaveReview { gig })
        } else {
            self.navigate(NavigateTo::LaborDashboard)
        }
    }

    pub fn submit_review(&mut self, gig_id: Uuid, dto: LeaveReviewDto) -> Result<(), ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.marketplace_service.submit_review(&user, gig_id, dto));
        self.report(result)?;

        self.toasts.push(Toast::success("Review submitted!").with_description("Thank you for your feedback"));
        self.navigate(NavigateTo::CustomerDashboard)
    }

    // ---- profile & credits ----

    /// Shallow-merges `patch` into the session user.
    pub fn save_profile(&mut self, patch: UserPatch) -> Result<User, ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.profile_service.save_profile(&user, patch));
        let user = self.report(result)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn submit_customer_profile(&mut self, dto: EditProfileDto) -> Result<(), ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.profile_service.update_customer_profile(&user, dto));
        let user = self.report(result)?;

        self.user = Some(user);
        self.toasts.push(Toast::success("Profile updated successfully!"));
        self.navigate(NavigateTo::CustomerProfile)
    }

    pub fn submit_labor_profile(&mut self, dto: EditLaborProfileDto) -> Result<(), ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.profile_service.update_labor_profile(&user, dto));
        let user = self.report(result)?;

        self.user = Some(user);
        self.toasts.push(Toast::success("Profile updated successfully!"));
        self.navigate(NavigateTo::LaborProfile)
    }

    pub fn purchase_credits(&mut self, package_id: &str) -> Result<User, ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.credit_service.purchase(&user, package_id));
        let user = self.report(result)?;

        let gained = user.credit_balance().saturating_sub(self.user.as_ref().map_or(0, User::credit_balance));
        self.toasts.push(Toast::success(format!("Successfully purchased {} credits!", gained)));
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Replaces the balance outright.
    pub fn credits_updated(&mut self, credits: u32) -> Result<User, ServiceError> {
        self.save_profile(UserPatch { credits: Some(credits), ..Default::default() })
    }

    // ---- chat ----

    pub fn send_message(&mut self, dto: SendMessageDto) -> Result<Option<Message>, ServiceError> {
        let result = match &self.route {
            NavigateTo::Chat { other_user, .. } => self
                .current_user()
                .and_then(|user| self.chat_service.send_message(&user, other_user, dto)),
            _ => Err(ServiceError::MissingContext { screen: Screen::Chat, missing: "chat partner" }),
        };
        self.report(result)
    }

    // ---- notifications ----

    /// Marks the notification read and follows its link.
    pub fn open_notification(&mut self, notification_id: Uuid) -> Result<(), ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.notification_service.open(&user, notification_id));

        match self.report(result)? {
            DeepLink::Navigate { screen, payload } => self.navigate_raw(screen.id(), payload),
            DeepLink::Toast(message) => {
                self.toasts.push(Toast::info(message));
                Ok(())
            }
            DeepLink::Nothing => Ok(()),
        }
    }

    pub fn mark_all_notifications_read(&mut self) -> Result<usize, ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.notification_service.mark_all_read(&user));
        let count = self.report(result)?;
        if count > 0 {
            self.toasts.push(Toast::success("All notifications marked as read"));
        }
        Ok(count)
    }

    pub fn toggle_notification_setting(&mut self, setting_id: &str) -> Result<bool, ServiceError> {
        let result = self
            .current_user()
            .and_then(|user| self.notification_service.toggle_setting(&user, setting_id));
        let setting = self.report(result)?;
        Ok(setting.enabled)
    }

    // ---- rendering ----

    pub fn render(&self) -> View {
        match (&self.route, &self.user) {
            (NavigateTo::Onboarding, _) => View::Onboarding,
            (NavigateTo::Auth, _) | (_, None) => View::Auth {
                demo_accounts: vec![DemoAccount::Customer, DemoAccount::Professional, DemoAccount::Admin],
            },
            (route, Some(user)) => self.render_for(route, user.clone()),
        }
    }

    fn render_for(&self, route: &NavigateTo, user: User) -> View {
        match route {
            NavigateTo::Onboarding | NavigateTo::Auth => View::Onboarding,
            NavigateTo::CustomerDashboard => {
                let gigs = self.marketplace_service.customer_gigs(&user);
                let with_status = |status: GigStatus| -> Vec<Gig> {
                    gigs.iter().filter(|g| g.status == status).cloned().collect()
                };
                let open_gigs = with_status(GigStatus::Open);
                let in_progress_gigs = with_status(GigStatus::Accepted);
                let past_gigs = gigs.iter().filter(|g| !g.status.is_active()).cloned().collect();
                let total_offers = open_gigs
                    .iter()
                    .chain(in_progress_gigs.iter())
                    .map(|g| g.offers.len())
                    .sum();
                View::CustomerDashboard {
                    unread_notifications: self.notification_service.unread_count(&user),
                    user,
                    open_gigs,
                    in_progress_gigs,
                    past_gigs,
                    total_offers,
                }
            }
            NavigateTo::CreateGig => View::CreateGig {
                form: CreateGigDto::new(GigCategory::Plumber, &self.profile_service.details(&user).location),
                categories: GigCategory::all().to_vec(),
                user,
            },
            NavigateTo::GigDetails { gig } => View::GigDetails {
                offers: gig.offers_by_price().into_iter().cloned().collect(),
                accepted_offer: gig.accepted_offer().cloned(),
                review: self.review_for(gig.id),
                gig: gig.clone(),
                user,
            },
            NavigateTo::LeaveReview { gig } => View::LeaveReview {
                labor_name: gig.accepted_offer().map(|o| o.labor_name.clone()),
                gig: gig.clone(),
                user,
            },
            NavigateTo::CustomerProfile => View::CustomerProfile {
                profile: self.profile_service.summary(&user),
                gigs_posted: self.marketplace_service.customer_gigs(&user).len(),
                user,
            },
            NavigateTo::EditCustomerProfile => View::EditCustomerProfile {
                form: EditProfileDto::from_user(&user, &self.profile_service.details(&user)),
                user,
            },
            NavigateTo::LaborDashboard => self.labor_dashboard(user),
            NavigateTo::GigBrowser => View::GigBrowser {
                gigs: self.marketplace_service.browse_gigs(&self.gig_filter),
                filter: self.gig_filter.clone(),
                user,
            },
            NavigateTo::SendOffer { gig } => View::SendOffer {
                form: SendOfferDto::for_gig(gig),
                credit_cost: self.marketplace_service.offer_credit_cost(),
                gig: gig.clone(),
                user,
            },
            NavigateTo::LaborProfile => View::LaborProfile {
                profile: self.profile_service.summary(&user),
                user,
            },
            NavigateTo::EditLaborProfile => View::EditLaborProfile {
                form: EditLaborProfileDto::from_user(&user, &self.profile_service.details(&user)),
                user,
            },
            NavigateTo::CreditManagement => View::CreditManagement {
                packages: self.credit_service.packages().to_vec(),
                transactions: self.credit_service.history(&user),
                user,
            },
            NavigateTo::NotificationInbox => View::NotificationInbox {
                notifications: self.notification_service.inbox(&user).unwrap_or_default(),
                unread_count: self.notification_service.unread_count(&user),
                user,
            },
            NavigateTo::Notifications => {
                let settings = self.notification_service.settings(&user).unwrap_or_default();
                View::Notifications {
                    enabled_count: settings.iter().filter(|s| s.enabled).count(),
                    settings,
                    user,
                }
            }
            NavigateTo::Chat { gig, other_user } => View::Chat {
                messages: self.chat_service.conversation(&user, other_user),
                gig: gig.clone(),
                other_user: other_user.clone(),
                user,
            },
            NavigateTo::Admin { page } => View::Admin {
                title: page.title(),
                layout: self.admin_layout,
                sections: nav_sections(),
                feature: match page {
                    AdminPage::Feature(feature) => Some(feature.info()),
                    _ => None,
                },
                stats: (*page == AdminPage::Dashboard).then(|| self.admin_stats()),
                page: *page,
                user,
            },
            NavigateTo::AdminPlaceholder { page } => View::AdminPlaceholder {
                page: *page,
                title: page.title(),
            },
        }
    }

    fn labor_dashboard(&self, user: User) -> View {
        let mine = self.marketplace_service.labor_gigs(&user);
        let hired = |gig: &&Gig| gig.accepted_offer().map_or(false, |o| o.labor_id == user.id);

        let my_offers = mine
            .iter()
            .flat_map(|g| g.offers.iter().filter(|o| o.labor_id == user.id).cloned())
            .collect();
        let active_jobs = mine
            .iter()
            .filter(hired)
            .filter(|g| g.status == GigStatus::Accepted)
            .cloned()
            .collect();
        let completed_jobs = mine
            .iter()
            .filter(hired)
            .filter(|g| !g.status.is_active())
            .cloned()
            .collect();
        let new_gigs = self
            .marketplace_service
            .browse_gigs(&GigFilterDto::default())
            .into_iter()
            .take(3)
            .collect();

        View::LaborDashboard {
            rating: self.profile_service.summary(&user).rating,
            unread_notifications: self.notification_service.unread_count(&user),
            new_gigs,
            my_offers,
            active_jobs,
            completed_jobs,
            user,
        }
    }

    fn review_for(&self, gig_id: Uuid) -> Option<Review> {
        self.db_client.get_gig_review(gig_id)
    }

    fn admin_stats(&self) -> AdminStats {
        AdminStats {
            total_users: self.db_client.get_user_count(),
            total_gigs: self.db_client.get_gig_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToastLevel;
    use crate::models::offermodel::OfferStatus;
    use crate::router::admin::PlaceholderPage;
    use crate::router::screen::Audience;

    fn empty_state() -> AppState {
        AppState::with_db(DBClient::new(), Config { seed_demo_data: false, ..Config::default() })
    }

    fn seeded_state() -> AppState {
        AppState::new(Config::default())
    }

    fn gig_form() -> CreateGigDto {
        CreateGigDto {
            title: "Fix leaking bathroom pipe".to_string(),
            description: "My bathroom sink has been leaking for 2 days.".to_string(),
            budget: Some("5000".to_string()),
            ..CreateGigDto::new(GigCategory::Plumber, "Tirana, Albania")
        }
    }

    fn offer_form() -> SendOfferDto {
        SendOfferDto {
            price: "4500".to_string(),
            description: "I can fix this today.".to_string(),
            estimated_time: "2 hours".to_string(),
        }
    }

    #[test]
    fn starts_on_onboarding() {
        let state = empty_state();
        assert_eq!(state.screen(), Screen::Onboarding);
        assert!(matches!(state.render(), View::Onboarding));
        assert!(state.bottom_nav().is_none());
    }

    #[test]
    fn every_identifier_renders_its_screen() {
        let accounts = |audience: Audience| match audience {
            Audience::Anyone | Audience::Customer => vec![DemoAccount::Customer],
            Audience::Labor => vec![DemoAccount::Professional],
            Audience::Member => vec![DemoAccount::Customer, DemoAccount::Professional],
            Audience::Admin => vec![DemoAccount::Admin],
        };

        for screen in Screen::all() {
            for account in accounts(screen.audience()) {
                let mut state = seeded_state();
                state.demo_sign_in(account).unwrap();
                let gig = state.marketplace_service.browse_gigs(&GigFilterDto::default())[0].clone();
                let payload = NavPayload {
                    other_user: Some(ChatPartner {
                        user_id: gig.customer_id,
                        user_name: gig.customer_name.clone(),
                        gig_id: gig.id,
                    }),
                    gig: Some(gig),
                    ..Default::default()
                };

                state.navigate_raw(screen.id(), payload).unwrap();
                assert_eq!(state.screen(), screen);
                assert_eq!(state.render().name(), screen.id(), "{:?}", account);
            }
        }

        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Admin).unwrap();
        state.navigate_raw("admin-does-not-exist", NavPayload::default()).unwrap();
        assert!(matches!(state.render(), View::Onboarding));
    }

    #[test]
    fn login_lands_on_role_dashboard() {
        for (account, screen) in [
            (DemoAccount::Customer, Screen::CustomerDashboard),
            (DemoAccount::Professional, Screen::LaborDashboard),
            (DemoAccount::Admin, Screen::Admin(AdminPage::Dashboard)),
        ] {
            let mut state = seeded_state();
            state.demo_sign_in(account).unwrap();
            assert_eq!(state.screen(), screen);
        }
    }

    #[test]
    fn login_without_role_is_refused() {
        let mut state = empty_state();
        let mut user = DemoAccount::Customer.user();
        user.role = None;
        assert_eq!(state.login(user), Err(ServiceError::RoleRequired));
        assert!(state.user().is_none());
        assert_eq!(state.take_toasts().len(), 1);
    }

    #[test]
    fn roles_cannot_open_each_others_screens() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Professional).unwrap();

        let err = state.navigate(NavigateTo::CreateGig).unwrap_err();
        assert!(matches!(err, ServiceError::UnauthorizedScreen { screen: Screen::CreateGig, .. }));
        assert_eq!(state.screen(), Screen::LaborDashboard);
        assert_eq!(state.take_toasts()[0].level, ToastLevel::Error);

        assert!(state.navigate(NavigateTo::Admin { page: AdminPage::Users }).is_err());
    }

    #[test]
    fn missing_context_leaves_state_alone() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();

        let err = state.navigate_raw("gig-details", NavPayload::default()).unwrap_err();
        assert!(matches!(err, ServiceError::MissingContext { screen: Screen::GigDetails, .. }));
        assert_eq!(state.screen(), Screen::CustomerDashboard);
        assert_eq!(state.context(), &NavContext::default());
    }

    #[test]
    fn held_gig_is_reused_by_later_navigation() {
        let mut state = empty_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        let gig = state.create_gig(gig_form()).unwrap();

        state.navigate_raw("gig-details", NavPayload::gig(gig.clone())).unwrap();
        state.navigate_raw("customer-dashboard", NavPayload::default()).unwrap();
        state.navigate_raw("gig-details", NavPayload::default()).unwrap();
        assert_eq!(state.route().gig().map(|g| g.id), Some(gig.id));
    }

    #[test]
    fn post_and_accept() {
        let mut state = empty_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        let gig = state.create_gig(gig_form()).unwrap();
        assert_eq!(gig.status, GigStatus::Open);
        assert_eq!(state.screen(), Screen::CustomerDashboard);

        state.logout();
        state.demo_sign_in(DemoAccount::Professional).unwrap();
        state.navigate(NavigateTo::SendOffer { gig: gig.clone() }).unwrap();
        let offer = state.send_offer(gig.id, offer_form()).unwrap();
        assert_eq!(offer.status, OfferStatus::Pending);
        assert_eq!(state.user().and_then(|u| u.credits), Some(9));
        assert_eq!(state.screen(), Screen::LaborDashboard);

        state.logout();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        state.accept_offer(gig.id, offer.id).unwrap();

        match state.route() {
            NavigateTo::Chat { gig: held, other_user } => {
                assert_eq!(held.status, GigStatus::Accepted);
                assert_eq!(held.accepted_offer_id, Some(offer.id));
                assert!(held.offers_consistent());
                assert_eq!(other_user.user_id, DEMO_LABOR_ID);
                assert_eq!(other_user.user_name, "Demo Pro");
            }
            other => panic!("expected chat, got {:?}", other.screen()),
        }
        assert!(matches!(state.render(), View::Chat { .. }));
    }

    #[test]
    fn insufficient_credits_keeps_everything() {
        let mut state = empty_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        let gig = state.create_gig(gig_form()).unwrap();

        state.logout();
        state.demo_sign_in(DemoAccount::Professional).unwrap();
        state.credits_updated(0).unwrap();
        state.navigate(NavigateTo::SendOffer { gig: gig.clone() }).unwrap();
        state.take_toasts();

        let err = state.send_offer(gig.id, offer_form()).unwrap_err();
        assert_eq!(err, ServiceError::InsufficientCredits { required: 1, available: 0 });
        assert_eq!(state.user().and_then(|u| u.credits), Some(0));
        assert_eq!(state.screen(), Screen::SendOffer);
        assert!(state.marketplace_service.gig(gig.id).unwrap().offers.is_empty());
        assert_eq!(state.take_toasts()[0].title, "Insufficient credits");
    }

    #[test]
    fn save_profile_changes_only_patched_fields() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Professional).unwrap();
        let before = state.user().cloned().unwrap();

        let after = state.save_profile(UserPatch::name("X")).unwrap();
        assert_eq!(after, User { name: "X".to_string(), ..before });
        assert_eq!(state.user(), Some(&after));
    }

    #[test]
    fn completion_and_review_flow() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        let gigs = state.marketplace_service.customer_gigs(state.user().unwrap());
        let in_progress = gigs.iter().find(|g| g.status == GigStatus::Accepted).unwrap().clone();

        state.mark_complete(in_progress.id).unwrap();
        assert_eq!(state.screen(), Screen::LeaveReview);

        let review = LeaveReviewDto { rating: 5, comment: "Perfect lighting".to_string(), photos: Vec::new() };
        state.submit_review(in_progress.id, review.clone()).unwrap();
        assert_eq!(state.screen(), Screen::CustomerDashboard);
        assert_eq!(
            state.marketplace_service.gig(in_progress.id).unwrap().status,
            GigStatus::Reviewed
        );

        assert_eq!(
            state.submit_review(in_progress.id, review),
            Err(ServiceError::DuplicateReview(in_progress.id))
        );
    }

    #[test]
    fn chat_deep_link_sets_partner_from_other_user() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        let user = state.user().cloned().unwrap();
        let message = state
            .notification_service
            .inbox(&user)
            .unwrap()
            .into_iter()
            .find(|n| n.title == "New Message")
            .unwrap();

        state.open_notification(message.id).unwrap();
        match state.route() {
            NavigateTo::Chat { other_user, .. } => assert_eq!(other_user.user_name, "Arben Hoxha"),
            other => panic!("expected chat, got {:?}", other.screen()),
        }
        match state.render() {
            View::Chat { messages, .. } => assert_eq!(messages.len(), 1),
            other => panic!("expected chat view, got {}", other.name()),
        }

        state.send_message(SendMessageDto::text("See you tomorrow")).unwrap();
        match state.render() {
            View::Chat { messages, .. } => assert_eq!(messages.len(), 2),
            other => panic!("expected chat view, got {}", other.name()),
        }
        state.back().unwrap();
        assert_eq!(state.screen(), Screen::CustomerDashboard);
    }

    #[test]
    fn toast_notifications_do_not_navigate() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Professional).unwrap();
        state.navigate(NavigateTo::NotificationInbox).unwrap();
        let user = state.user().cloned().unwrap();
        let review = state
            .notification_service
            .inbox(&user)
            .unwrap()
            .into_iter()
            .find(|n| n.title == "New Review Received")
            .unwrap();

        state.open_notification(review.id).unwrap();
        assert_eq!(state.screen(), Screen::NotificationInbox);
        assert_eq!(state.take_toasts()[0].title, "⭐ Great job! Keep up the excellent work.");
    }

    #[test]
    fn admin_layout_survives_page_changes_only() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Admin).unwrap();

        state.toggle_admin_sidebar();
        state.set_admin_mobile_menu(true);
        state.select_admin_page(AdminPage::Users).unwrap();
        assert!(!state.admin_layout().sidebar_open);
        assert!(!state.admin_layout().mobile_menu_open);

        state.navigate(NavigateTo::AdminPlaceholder { page: PlaceholderPage::Disputes }).unwrap();
        assert_eq!(state.admin_layout(), AdminLayoutState::default());
        assert!(matches!(
            state.render(),
            View::AdminPlaceholder { ref title, .. } if title == "Disputes"
        ));
    }

    #[test]
    fn purchase_updates_session_user() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Professional).unwrap();
        state.navigate(NavigateTo::CreditManagement).unwrap();

        state.purchase_credits("starter").unwrap();
        assert_eq!(state.user().and_then(|u| u.credits), Some(15));
        assert_eq!(state.take_toasts()[0].title, "Successfully purchased 5 credits!");
        match state.render() {
            View::CreditManagement { transactions, packages, .. } => {
                assert_eq!(transactions.len(), 1);
                assert_eq!(packages.len(), 4);
            }
            other => panic!("expected credits view, got {}", other.name()),
        }
        state.back().unwrap();
        assert_eq!(state.screen(), Screen::LaborDashboard);
    }

    #[test]
    fn gig_browser_uses_filter() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Professional).unwrap();
        state.select_tab(Tab::Create).unwrap();
        assert_eq!(state.screen(), Screen::GigBrowser);

        state.set_gig_filter("ceiling", Some(GigCategory::Electrician));
        match state.render() {
            View::GigBrowser { gigs, .. } => {
                assert_eq!(gigs.len(), 1);
                assert_eq!(gigs[0].title, "Install ceiling fan");
            }
            other => panic!("expected browser, got {}", other.name()),
        }
    }

    #[test]
    fn profile_edit_round_trip() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        state.navigate(NavigateTo::EditCustomerProfile).unwrap();

        let mut form = match state.render() {
            View::EditCustomerProfile { form, .. } => form,
            other => panic!("expected edit form, got {}", other.name()),
        };
        form.phone = "+355 69 123 4567".to_string();
        state.submit_customer_profile(form).unwrap();

        assert_eq!(state.screen(), Screen::CustomerProfile);
        let stored = state.db_client.get_user(DEMO_CUSTOMER_ID).unwrap();
        assert_eq!(stored.phone.as_deref(), Some("+355 69 123 4567"));
        assert_eq!(state.user(), Some(&stored));
    }

    #[test]
    fn logout_returns_to_auth_and_forgets_context() {
        let mut state = seeded_state();
        state.demo_sign_in(DemoAccount::Customer).unwrap();
        let gig = state.marketplace_service.customer_gigs(state.user().unwrap())[0].clone();
        state.navigate(NavigateTo::GigDetails { gig }).unwrap();

        state.logout();
        assert_eq!(state.screen(), Screen::Auth);
        assert!(state.user().is_none());
        assert_eq!(state.context(), &NavContext::default());
        assert!(state.navigate(NavigateTo::CustomerDashboard).is_err());
    }
}
