// service/profile_service.rs
use std::rc::Rc;

use serde::Serialize;

use crate::{
    db::{db::DBClient, reviewdb::ReviewExt, userdb::UserExt},
    dtos::userdtos::{EditLaborProfileDto, EditProfileDto},
    models::{reviewmodel::Review, usermodel::*},
    service::{ensure_role, error::ServiceError},
    utils::validation::validate_dto,
};

/// Everything a profile page shows besides the user itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub details: ProfileDetails,
    pub rating: Option<f32>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone)]
pub struct ProfileService {
    db_client: Rc<DBClient>,
    default_location: String,
}

impl ProfileService {
    pub fn new(db_client: Rc<DBClient>, default_location: String) -> Self {
        Self { db_client, default_location }
    }

    pub fn details(&self, user: &User) -> ProfileDetails {
        self.db_client
            .get_profile_details(user.id)
            .unwrap_or_else(|| ProfileDetails {
                location: self.default_location.clone(),
                ..Default::default()
            })
    }

    pub fn summary(&self, user: &User) -> ProfileSummary {
        ProfileSummary {
            details: self.details(user),
            rating: self.db_client.get_labor_rating(user.id),
            reviews: self.db_client.get_labor_reviews(user.id),
        }
    }

    /// Shallow-merges `patch` into the stored user; untouched fields keep
    /// their values.
    pub fn save_profile(&self, user: &User, patch: UserPatch) -> Result<User, ServiceError> {
        let updated = self.db_client.update_user(user.id, patch)?;
        tracing::info!("Profile saved for user {}", user.id);
        Ok(updated)
    }

    /// An email belongs to one account; keeping your own is fine.
    fn ensure_email_free(&self, user: &User, email: &str) -> Result<(), ServiceError> {
        match self.db_client.get_user_by_email(email) {
            Some(owner) if owner.id != user.id => Err(ServiceError::EmailTaken(email.trim().to_string())),
            _ => Ok(()),
        }
    }

    pub fn update_customer_profile(&self, user: &User, dto: EditProfileDto) -> Result<User, ServiceError> {
        ensure_role(user, UserRole::Customer)?;
        validate_dto(&dto)?;
        self.ensure_email_free(user, &dto.email)?;

        let mut details = self.details(user);
        details.location = dto.location.trim().to_string();
        let updated = self.save_profile(user, dto.to_patch())?;
        self.db_client.save_profile_details(user.id, details);
        Ok(updated)
    }

    pub fn update_labor_profile(&self, user: &User, dto: EditLaborProfileDto) -> Result<User, ServiceError> {
        ensure_role(user, UserRole::Labor)?;
        validate_dto(&dto)?;
        self.ensure_email_free(user, &dto.email)?;

        let updated = self.save_profile(user, dto.to_patch())?;
        self.db_client.save_profile_details(user.id, dto.to_details());
        Ok(updated)
    }
}
