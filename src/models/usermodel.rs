use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Labor,
    Admin,
}

impl UserRole {
    pub fn to_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Labor => "labor",
            UserRole::Admin => "admin",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Fixed at login; `None` only for half-built accounts that cannot sign in.
    pub role: Option<UserRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
}

impl User {
    pub fn credit_balance(&self) -> u32 {
        self.credits.unwrap_or(0)
    }

    pub fn is_role(&self, role: UserRole) -> bool {
        self.role == Some(role)
    }

    /// Shallow merge: every field present in the patch replaces the current
    /// value, everything else is carried over untouched.
    pub fn merged(&self, patch: UserPatch) -> User {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(email) = patch.email {
            next.email = email;
        }
        if let Some(phone) = patch.phone {
            next.phone = phone;
        }
        if let Some(avatar) = patch.avatar {
            next.avatar = avatar;
        }
        if let Some(credits) = patch.credits {
            next.credits = Some(credits);
        }
        next
    }
}

/// Partial user update. The double options on `phone`/`avatar` separate
/// "leave alone" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub credits: Option<u32>,
}

impl UserPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Profile fields that live outside the session user: where the person
/// works and, for professionals, their pitch and trade skills.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProfileDetails {
    pub location: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

pub const DEMO_CUSTOMER_ID: Uuid = Uuid::from_u128(0x0d3e_0000_0000_0000_0000_0000_0000_0001);
pub const DEMO_LABOR_ID: Uuid = Uuid::from_u128(0x0d3e_0000_0000_0000_0000_0000_0000_0002);
pub const DEMO_ADMIN_ID: Uuid = Uuid::from_u128(0x0d3e_0000_0000_0000_0000_0000_0000_0003);

/// Quick-access accounts offered on the sign-in screen.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemoAccount {
    Customer,
    Professional,
    Admin,
}

impl DemoAccount {
    pub fn user(&self) -> User {
        match self {
            DemoAccount::Customer => User {
                id: DEMO_CUSTOMER_ID,
                name: "Demo Customer".to_string(),
                email: "customer@demo.com".to_string(),
                role: Some(UserRole::Customer),
                avatar: None,
                phone: None,
                credits: Some(5),
            },
            DemoAccount::Professional => User {
                id: DEMO_LABOR_ID,
                name: "Demo Pro".to_string(),
                email: "labor@demo.com".to_string(),
                role: Some(UserRole::Labor),
                avatar: None,
                phone: None,
                credits: Some(10),
            },
            DemoAccount::Admin => User {
                id: DEMO_ADMIN_ID,
                name: "Admin User".to_string(),
                email: "admin@mjeshtri.com".to_string(),
                role: Some(UserRole::Admin),
                avatar: None,
                phone: None,
                credits: Some(0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_outlive_the_role_value() {
        let label = |role: Option<UserRole>| role.map_or("unknown", |r| r.to_str());
        assert_eq!(label(Some(UserRole::Labor)), "labor");
        assert_eq!(label(None), "unknown");
    }

    #[test]
    fn name_patch_leaves_other_fields_alone() {
        let mut user = DemoAccount::Customer.user();
        user.phone = Some("+355 69 123 4567".to_string());
        user.avatar = Some("https://cdn.example/a.png".to_string());

        let updated = user.merged(UserPatch::name("X"));

        assert_eq!(updated.name, "X");
        assert_eq!(User { name: user.name.clone(), ..updated }, user);
    }

    #[test]
    fn patch_can_clear_phone() {
        let mut user = DemoAccount::Professional.user();
        user.phone = Some("069 000 0000".to_string());

        let updated = user.merged(UserPatch {
            phone: Some(None),
            ..Default::default()
        });

        assert_eq!(updated.phone, None);
        assert_eq!(updated.email, user.email);
    }

    #[test]
    fn demo_accounts_carry_their_roles() {
        assert!(DemoAccount::Customer.user().is_role(UserRole::Customer));
        assert!(DemoAccount::Professional.user().is_role(UserRole::Labor));
        assert_eq!(DemoAccount::Admin.user().credit_balance(), 0);
    }
}
