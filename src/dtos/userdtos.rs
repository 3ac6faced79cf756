use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::usermodel::*;
use crate::utils::validation::{not_blank, phone_number, skill_list};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct SignInDto {
    #[validate(length(min = 1, message = "Email is required"), email(message = "Email is invalid"))]
    pub email: String,
    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct SignUpDto {
    #[validate(custom = "not_blank")]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"), email(message = "Email is invalid"))]
    pub email: String,

    #[validate(custom = "phone_number")]
    pub phone: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(custom = "validate_signup_role")]
    pub role: UserRole,
}

fn validate_signup_role(role: &UserRole) -> Result<(), ValidationError> {
    match role {
        UserRole::Customer | UserRole::Labor => Ok(()),
        UserRole::Admin => {
            let mut error = ValidationError::new("invalid_role");
            error.message = Some("Admin accounts cannot be created from the sign-up form".into());
            Err(error)
        }
    }
}

impl SignUpDto {
    pub fn into_user(self, credits: u32) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: Some(self.role),
            avatar: None,
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            credits: Some(credits),
        }
    }
}

/// Customer "edit profile" form.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct EditProfileDto {
    #[validate(custom = "not_blank")]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"), email(message = "Email is invalid"))]
    pub email: String,

    #[validate(custom = "phone_number")]
    pub phone: String,

    pub location: String,
}

impl EditProfileDto {
    pub fn from_user(user: &User, details: &ProfileDetails) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            location: details.location.clone(),
        }
    }

    /// Trimmed values; a blank phone clears the stored number.
    pub fn to_patch(&self) -> UserPatch {
        let phone = self.phone.trim();
        UserPatch {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone: Some(if phone.is_empty() { None } else { Some(phone.to_string()) }),
            ..Default::default()
        }
    }
}

/// Professional "edit profile" form: the customer fields plus bio and skills.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct EditLaborProfileDto {
    #[validate(custom = "not_blank")]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"), email(message = "Email is invalid"))]
    pub email: String,

    #[validate(custom = "phone_number")]
    pub phone: String,

    pub location: String,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: String,

    #[validate(custom = "skill_list")]
    pub skills: Vec<String>,
}

impl EditLaborProfileDto {
    pub fn from_user(user: &User, details: &ProfileDetails) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            location: details.location.clone(),
            bio: details.bio.clone().unwrap_or_default(),
            skills: details.skills.clone(),
        }
    }

    pub fn to_patch(&self) -> UserPatch {
        EditProfileDto {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
        }
        .to_patch()
    }

    pub fn to_details(&self) -> ProfileDetails {
        let bio = self.bio.trim();
        ProfileDetails {
            location: self.location.trim().to_string(),
            bio: if bio.is_empty() { None } else { Some(bio.to_string()) },
            skills: self.skills.iter().map(|s| s.trim().to_string()).collect(),
        }
    }
}
