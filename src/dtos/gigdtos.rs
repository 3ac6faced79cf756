use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{gigmodel::*, usermodel::User};
use crate::utils::validation::{gig_description, gig_title, not_blank, parse_amount, positive_amount};

/// The "post a gig" form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGigDto {
    pub category: GigCategory,

    #[validate(custom = "gig_title")]
    pub title: String,

    #[validate(custom = "gig_description")]
    pub description: String,

    /// Optional; when given it must be a whole number of lek.
    #[validate(custom = "positive_amount")]
    pub budget: Option<String>,

    #[validate(custom = "not_blank")]
    pub location: String,

    #[serde(default)]
    pub photos: Vec<String>,
}

impl CreateGigDto {
    pub fn new(category: GigCategory, default_location: &str) -> Self {
        Self {
            category,
            title: String::new(),
            description: String::new(),
            budget: None,
            location: default_location.to_string(),
            photos: Vec::new(),
        }
    }

    pub fn into_gig(self, customer: &User) -> Gig {
        Gig {
            id: Uuid::new_v4(),
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            budget: self.budget.as_deref().and_then(parse_amount),
            location: self.location.trim().to_string(),
            photos: self.photos,
            status: GigStatus::Open,
            created_at: Utc::now(),
            offers: Vec::new(),
            accepted_offer_id: None,
        }
    }
}

/// Search box plus category chips on the gig browser. `category: None` is "All".
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GigFilterDto {
    pub search: String,
    pub category: Option<GigCategory>,
}

impl GigFilterDto {
    pub fn matches(&self, gig: &Gig) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || gig.title.to_lowercase().contains(&needle)
            || gig.description.to_lowercase().contains(&needle);
        let matches_category = self.category.map_or(true, |c| c == gig.category);
        matches_search && matches_category
    }
}
