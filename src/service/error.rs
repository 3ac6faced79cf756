use thiserror::Error;
use uuid::Uuid;

use crate::{
    error::FieldErrors,
    models::{gigmodel::GigStatus, offermodel::OfferStatus, usermodel::UserRole},
    router::screen::Screen,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Insufficient credits: required {required}, available {available}")]
    InsufficientCredits { required: u32, available: u32 },

    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Gig {0} not found")]
    GigNotFound(Uuid),

    #[error("Offer {0} not found")]
    OfferNotFound(Uuid),

    #[error("Notification {0} not found")]
    NotificationNotFound(Uuid),

    #[error("Notification setting {0} not found")]
    NotificationSettingNotFound(String),

    #[error("Credit package {0} not found")]
    PackageNotFound(String),

    #[error("Gig {gig_id} cannot move from {from:?} to {to:?}")]
    InvalidGigTransition { gig_id: Uuid, from: GigStatus, to: GigStatus },

    #[error("Gig {0} is no longer taking offers (status {1:?})")]
    GigNotOpen(Uuid, GigStatus),

    #[error("Offer {0} was already {1:?}")]
    OfferAlreadyResolved(Uuid, OfferStatus),

    #[error("Offer {offer_id} does not belong to gig {gig_id}")]
    OfferGigMismatch { offer_id: Uuid, gig_id: Uuid },

    #[error("Gig {0} already has a review")]
    DuplicateReview(Uuid),

    #[error("User {0} is not authorized to perform this action on gig {1}")]
    UnauthorizedGigAccess(Uuid, Uuid),

    #[error("Only {required:?} accounts can do this")]
    WrongRole { required: UserRole },

    #[error("An account with email {0} already exists")]
    EmailTaken(String),

    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Account has no role and cannot sign in")]
    RoleRequired,

    #[error("Role {role:?} cannot open {screen:?}")]
    UnauthorizedScreen { role: Option<UserRole>, screen: Screen },

    #[error("Screen {screen:?} needs a selected {missing}")]
    MissingContext { screen: Screen, missing: &'static str },

    #[error("Other error: {0}")]
    Other(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Validation(FieldErrors::from(errors))
    }
}

impl From<String> for ServiceError {
    fn from(err: String) -> Self {
        ServiceError::Other(err)
    }
}

impl ServiceError {
    /// Form-level problems the user can fix by editing their input.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::InsufficientCredits { .. }
        )
    }
}
