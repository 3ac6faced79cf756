use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::service::error::ServiceError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

impl OfferStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            OfferStatus::Pending => "pending",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Offer {
    pub id: Uuid,
    pub gig_id: Uuid,
    pub labor_id: Uuid,
    pub labor_name: String,
    pub labor_avatar: Option<String>,
    pub labor_rating: Option<f32>,
    /// Whole lek, always > 0.
    pub price: u64,
    pub description: String,
    pub estimated_time: String,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    pub fn is_pending(&self) -> bool {
        self.status == OfferStatus::Pending
    }

    pub fn accept(&mut self) -> Result<(), ServiceError> {
        self.resolve(OfferStatus::Accepted)
    }

    pub fn reject(&mut self) -> Result<(), ServiceError> {
        self.resolve(OfferStatus::Rejected)
    }

    // pending is the only non-terminal state
    fn resolve(&mut self, to: OfferStatus) -> Result<(), ServiceError> {
        if !self.is_pending() {
            return Err(ServiceError::OfferAlreadyResolved(self.id, self.status));
        }
        self.status = to;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_offer(gig_id: Uuid, price: u64) -> Offer {
    Offer {
        id: Uuid::new_v4(),
        gig_id,
        labor_id: Uuid::new_v4(),
        labor_name: "Arben Hoxha".to_string(),
        labor_avatar: None,
        labor_rating: Some(4.8),
        price,
        description: "I have 10 years of experience in plumbing.".to_string(),
        estimated_time: "2 hours".to_string(),
        status: OfferStatus::Pending,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_leaves_pending_exactly_once() {
        let mut offer = sample_offer(Uuid::new_v4(), 4500);
        offer.accept().unwrap();
        assert_eq!(offer.status, OfferStatus::Accepted);

        let err = offer.reject().unwrap_err();
        assert!(matches!(err, ServiceError::OfferAlreadyResolved(_, OfferStatus::Accepted)));
        assert_eq!(offer.status, OfferStatus::Accepted);
    }

    #[test]
    fn rejected_offer_cannot_be_accepted() {
        let mut offer = sample_offer(Uuid::new_v4(), 5200);
        offer.reject().unwrap();
        assert!(offer.accept().is_err());
        assert_eq!(offer.status, OfferStatus::Rejected);
    }
}
