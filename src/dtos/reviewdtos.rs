use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{gigmodel::Gig, reviewmodel::Review, usermodel::User};
use crate::utils::validation::not_blank;

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct LeaveReviewDto {
    /// 0 means "no star picked yet".
    #[validate(range(min = 1, max = 5, message = "Please select a rating"))]
    pub rating: u8,

    #[validate(custom = "not_blank")]
    pub comment: String,

    #[serde(default)]
    pub photos: Vec<String>,
}

impl LeaveReviewDto {
    pub fn into_review(self, gig: &Gig, customer: &User, labor_id: Uuid) -> Review {
        Review {
            id: Uuid::new_v4(),
            gig_id: gig.id,
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            labor_id,
            rating: self.rating,
            comment: self.comment.trim().to_string(),
            photos: self.photos,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_must_be_picked() {
        let dto = LeaveReviewDto { rating: 0, comment: "Great work".to_string(), photos: vec![] };
        assert!(dto.validate().unwrap_err().field_errors().contains_key("rating"));

        let dto = LeaveReviewDto { rating: 6, ..dto };
        assert!(dto.validate().is_err());

        let dto = LeaveReviewDto { rating: 5, ..dto };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn comment_cannot_be_blank() {
        let dto = LeaveReviewDto { rating: 4, comment: "  ".to_string(), photos: vec![] };
        assert!(dto.validate().unwrap_err().field_errors().contains_key("comment"));
    }
}
