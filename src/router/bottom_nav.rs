use serde::{Deserialize, Serialize};

use crate::models::usermodel::UserRole;
use crate::router::navigate::NavigateTo;
use crate::router::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Home,
    Create,
    Profile,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Home, Tab::Create, Tab::Profile]
    }

    pub fn label(&self, role: UserRole) -> &'static str {
        match (self, role) {
            (Tab::Home, _) => "Home",
            (Tab::Create, UserRole::Labor) => "Browse",
            (Tab::Create, _) => "Post Gig",
            (Tab::Profile, _) => "Profile",
        }
    }

    pub fn target(&self, role: UserRole) -> NavigateTo {
        match (self, role) {
            (Tab::Home, role) => NavigateTo::dashboard_for(role),
            (Tab::Create, UserRole::Labor) => NavigateTo::GigBrowser,
            (Tab::Create, _) => NavigateTo::CreateGig,
            (Tab::Profile, role) => NavigateTo::profile_for(role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BottomNavItem {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

/// The tab bar for customers and professionals. Admins and signed-out
/// visitors never see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BottomNav {
    pub role: UserRole,
    pub items: Vec<BottomNavItem>,
}

impl BottomNav {
    pub fn for_screen(screen: Screen, role: Option<UserRole>) -> Option<BottomNav> {
        let role = match role {
            Some(role @ (UserRole::Customer | UserRole::Labor)) => role,
            _ => return None,
        };
        if screen.is_public() {
            return None;
        }

        let items = Tab::all()
            .into_iter()
            .map(|tab| BottomNavItem {
                tab,
                label: tab.label(role),
                active: active_tab(screen, role) == Some(tab),
            })
            .collect();

        Some(BottomNav { role, items })
    }

    pub fn active(&self) -> Option<Tab> {
        self.items.iter().find(|i| i.active).map(|i| i.tab)
    }
}

fn active_tab(screen: Screen, role: UserRole) -> Option<Tab> {
    match (screen, role) {
        (Screen::CustomerDashboard, UserRole::Customer) | (Screen::LaborDashboard, UserRole::Labor) => {
            Some(Tab::Home)
        }
        (Screen::CreateGig, UserRole::Customer)
        | (Screen::GigBrowser | Screen::SendOffer, UserRole::Labor) => Some(Tab::Create),
        (Screen::CustomerProfile, UserRole::Customer) | (Screen::LaborProfile, UserRole::Labor) => {
            Some(Tab::Profile)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_for_admins_and_public_screens() {
        assert!(BottomNav::for_screen(Screen::Auth, Some(UserRole::Customer)).is_none());
        assert!(BottomNav::for_screen(Screen::CustomerDashboard, None).is_none());
        assert!(BottomNav::for_screen(Screen::Chat, Some(UserRole::Admin)).is_none());
    }

    #[test]
    fn send_offer_highlights_browse_for_labor() {
        let nav = BottomNav::for_screen(Screen::SendOffer, Some(UserRole::Labor)).unwrap();
        assert_eq!(nav.active(), Some(Tab::Create));
        assert_eq!(Tab::Create.target(UserRole::Labor), NavigateTo::GigBrowser);
    }

    #[test]
    fn detail_screens_have_no_active_tab() {
        let nav = BottomNav::for_screen(Screen::Chat, Some(UserRole::Customer)).unwrap();
        assert_eq!(nav.active(), None);
        assert_eq!(nav.items.len(), 3);
    }

    #[test]
    fn targets_follow_role() {
        assert_eq!(Tab::Home.target(UserRole::Customer), NavigateTo::CustomerDashboard);
        assert_eq!(Tab::Profile.target(UserRole::Labor), NavigateTo::LaborProfile);
        assert_eq!(Tab::Create.target(UserRole::Customer), NavigateTo::CreateGig);
    }
}
