use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{gigmodel::Gig, offermodel::*, usermodel::User};
use crate::utils::validation::{not_blank, parse_amount, positive_amount};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOfferDto {
    /// Raw text from the price input.
    #[validate(custom = "positive_amount")]
    pub price: String,

    #[validate(custom = "not_blank")]
    pub description: String,

    #[validate(custom = "not_blank")]
    pub estimated_time: String,
}

impl SendOfferDto {
    /// The form opens with the gig's budget as the suggested price.
    pub fn for_gig(gig: &Gig) -> Self {
        Self {
            price: gig.budget.map(|b| b.to_string()).unwrap_or_default(),
            description: String::new(),
            estimated_time: String::new(),
        }
    }

    /// Only call after `validate()` passed; an unparsable price becomes 0.
    pub fn into_offer(self, gig: &Gig, labor: &User, labor_rating: Option<f32>) -> Offer {
        Offer {
            id: Uuid::new_v4(),
            gig_id: gig.id,
            labor_id: labor.id,
            labor_name: labor.name.clone(),
            labor_avatar: labor.avatar.clone(),
            labor_rating,
            price: parse_amount(&self.price).unwrap_or(0),
            description: self.description.trim().to_string(),
            estimated_time: self.estimated_time.trim().to_string(),
            status: OfferStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
