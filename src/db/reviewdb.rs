// db/reviewdb.rs
use uuid::Uuid;

use super::db::DBClient;
use crate::models::reviewmodel::Review;
use crate::service::error::ServiceError;

pub trait ReviewExt {
    /// One review per gig.
    fn save_review(&self, review: Review) -> Result<Review, ServiceError>;

    fn get_gig_review(&self, gig_id: Uuid) -> Option<Review>;

    /// Newest first.
    fn get_labor_reviews(&self, labor_id: Uuid) -> Vec<Review>;

    /// Mean star rating rounded to one decimal, `None` before the first review.
    fn get_labor_rating(&self, labor_id: Uuid) -> Option<f32>;
}

impl ReviewExt for DBClient {
    fn save_review(&self, review: Review) -> Result<Review, ServiceError> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews.iter().any(|r| r.gig_id == review.gig_id) {
            return Err(ServiceError::DuplicateReview(review.gig_id));
        }
        reviews.push(review.clone());
        Ok(review)
    }

    fn get_gig_review(&self, gig_id: Uuid) -> Option<Review> {
        self.reviews.borrow().iter().find(|r| r.gig_id == gig_id).cloned()
    }

    fn get_labor_reviews(&self, labor_id: Uuid) -> Vec<Review> {
        self.reviews
            .borrow()
            .iter()
            .rev()
            .filter(|r| r.labor_id == labor_id)
            .cloned()
            .collect()
    }

    fn get_labor_rating(&self, labor_id: Uuid) -> Option<f32> {
        let reviews = self.reviews.borrow();
        let ratings: Vec<f32> = reviews
            .iter()
            .filter(|r| r.labor_id == labor_id)
            .map(|r| f32::from(r.rating))
            .collect();
        if ratings.is_empty() {
            return None;
        }
        let mean = ratings.iter().sum::<f32>() / ratings.len() as f32;
        Some((mean * 10.0).round() / 10.0)
    }
}
