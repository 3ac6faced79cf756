pub mod auth_service;
pub mod chat_service;
pub mod credit_service;
pub mod error;
pub mod marketplace_service;
pub mod notification_service;
pub mod profile_service;

use crate::models::usermodel::{User, UserRole};
use error::ServiceError;

pub fn require_role(user: &User) -> Result<UserRole, ServiceError> {
    user.role.ok_or(ServiceError::RoleRequired)
}

pub fn ensure_role(user: &User, required: UserRole) -> Result<(), ServiceError> {
    if require_role(user)? != required {
        return Err(ServiceError::WrongRole { required });
    }
    Ok(())
}
