// db/userdb.rs
use uuid::Uuid;

use super::db::DBClient;
use crate::models::usermodel::*;
use crate::service::error::ServiceError;

pub trait UserExt {
    /// Inserts or replaces by id.
    fn save_user(&self, user: User) -> User;

    fn get_user(&self, user_id: Uuid) -> Option<User>;

    fn get_user_by_email(&self, email: &str) -> Option<User>;

    fn update_user(&self, user_id: Uuid, patch: UserPatch) -> Result<User, ServiceError>;

    fn get_profile_details(&self, user_id: Uuid) -> Option<ProfileDetails>;

    fn save_profile_details(&self, user_id: Uuid, details: ProfileDetails) -> ProfileDetails;

    fn get_user_count(&self) -> usize;
}

impl UserExt for DBClient {
    fn save_user(&self, user: User) -> User {
        self.users.borrow_mut().insert(user.id, user.clone());
        user
    }

    fn get_user(&self, user_id: Uuid) -> Option<User> {
        self.users.borrow().get(&user_id).cloned()
    }

    fn get_user_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim();
        self.users
            .borrow()
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    fn update_user(&self, user_id: Uuid, patch: UserPatch) -> Result<User, ServiceError> {
        let mut users = self.users.borrow_mut();
        let current = users.get(&user_id).ok_or(ServiceError::UserNotFound(user_id))?;
        let updated = current.merged(patch);
        users.insert(user_id, updated.clone());
        Ok(updated)
    }

    fn get_profile_details(&self, user_id: Uuid) -> Option<ProfileDetails> {
        self.profiles.borrow().get(&user_id).cloned()
    }

    fn save_profile_details(&self, user_id: Uuid, details: ProfileDetails) -> ProfileDetails {
        self.profiles.borrow_mut().insert(user_id, details.clone());
        details
    }

    fn get_user_count(&self) -> usize {
        self.users.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_merges_patch() {
        let db = DBClient::new();
        let user = db.save_user(DemoAccount::Customer.user());

        let updated = db.update_user(user.id, UserPatch::name("X")).unwrap();
        assert_eq!(updated.name, "X");
        assert_eq!(updated.email, user.email);
        assert_eq!(db.get_user(user.id), Some(updated));
    }

    #[test]
    fn lookups() {
        let db = DBClient::new();
        db.save_user(DemoAccount::Professional.user());
        assert!(db.get_user_by_email("LABOR@demo.com ").is_some());
        assert!(db.get_user_by_email("nobody@demo.com").is_none());
        assert!(matches!(
            db.update_user(Uuid::new_v4(), UserPatch::default()),
            Err(ServiceError::UserNotFound(_))
        ));
    }
}
