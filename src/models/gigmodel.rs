use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::offermodel::{Offer, OfferStatus};
use crate::service::error::ServiceError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GigCategory {
    Plumber,
    Electrician,
    Painter,
    Handyman,
    Carpenter,
    Other,
}

impl GigCategory {
    pub fn to_str(&self) -> &'static str {
        match self {
            GigCategory::Plumber => "plumber",
            GigCategory::Electrician => "electrician",
            GigCategory::Painter => "painter",
            GigCategory::Handyman => "handyman",
            GigCategory::Carpenter => "carpenter",
            GigCategory::Other => "other",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GigCategory::Plumber => "Plumber",
            GigCategory::Electrician => "Electrician",
            GigCategory::Painter => "Painter",
            GigCategory::Handyman => "Handyman",
            GigCategory::Carpenter => "Carpenter",
            GigCategory::Other => "Other",
        }
    }

    pub fn all() -> &'static [GigCategory] {
        &[
            GigCategory::Plumber,
            GigCategory::Electrician,
            GigCategory::Painter,
            GigCategory::Handyman,
            GigCategory::Carpenter,
            GigCategory::Other,
        ]
    }

    /// Accepts either the id (`plumber`) or the display name (`Plumber`).
    /// Anything unrecognised lands in `Other`.
    pub fn parse(value: &str) -> GigCategory {
        let value = value.trim();
        GigCategory::all()
            .iter()
            .copied()
            .find(|c| c.to_str() == value || c.name().eq_ignore_ascii_case(value))
            .unwrap_or(GigCategory::Other)
    }
}

/// Lifecycle of a gig. Declaration order is the only legal direction of travel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GigStatus {
    Open,
    Accepted,
    Completed,
    Reviewed,
}

impl GigStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            GigStatus::Open => "open",
            GigStatus::Accepted => "accepted",
            GigStatus::Completed => "completed",
            GigStatus::Reviewed => "reviewed",
        }
    }

    pub fn next(&self) -> Option<GigStatus> {
        match self {
            GigStatus::Open => Some(GigStatus::Accepted),
            GigStatus::Accepted => Some(GigStatus::Completed),
            GigStatus::Completed => Some(GigStatus::Reviewed),
            GigStatus::Reviewed => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, GigStatus::Open | GigStatus::Accepted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gig {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub title: String,
    pub description: String,
    pub category: GigCategory,
    pub budget: Option<u64>,
    pub location: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub status: GigStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    pub accepted_offer_id: Option<Uuid>,
}

impl Gig {
    pub fn offer(&self, offer_id: Uuid) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == offer_id)
    }

    pub fn accepted_offer(&self) -> Option<&Offer> {
        self.accepted_offer_id.and_then(|id| self.offer(id))
    }

    /// Cheapest first, the order customers compare offers in.
    pub fn offers_by_price(&self) -> Vec<&Offer> {
        let mut offers: Vec<&Offer> = self.offers.iter().collect();
        offers.sort_by_key(|o| o.price);
        offers
    }

    pub fn pending_offer_count(&self) -> usize {
        self.offers.iter().filter(|o| o.is_pending()).count()
    }

    pub fn add_offer(&mut self, offer: Offer) -> Result<(), ServiceError> {
        if self.status != GigStatus::Open {
            return Err(ServiceError::GigNotOpen(self.id, self.status));
        }
        if offer.gig_id != self.id {
            return Err(ServiceError::OfferGigMismatch {
                offer_id: offer.id,
                gig_id: self.id,
            });
        }
        self.offers.push(offer);
        Ok(())
    }

    /// Accepts one pending offer, declines the rest and moves the gig to
    /// `accepted`. Nothing changes on error.
    pub fn accept_offer(&mut self, offer_id: Uuid) -> Result<Offer, ServiceError> {
        self.ensure_transition(GigStatus::Accepted)?;
        let index = self
            .offers
            .iter()
            .position(|o| o.id == offer_id)
            .ok_or(ServiceError::OfferNotFound(offer_id))?;

        self.offers[index].accept()?;
        for offer in self.offers.iter_mut().filter(|o| o.is_pending()) {
            offer.status = OfferStatus::Rejected;
        }
        self.accepted_offer_id = Some(offer_id);
        self.status = GigStatus::Accepted;

        Ok(self.offers[index].clone())
    }

    pub fn reject_offer(&mut self, offer_id: Uuid) -> Result<Offer, ServiceError> {
        let offer = self
            .offers
            .iter_mut()
            .find(|o| o.id == offer_id)
            .ok_or(ServiceError::OfferNotFound(offer_id))?;
        offer.reject()?;
        Ok(offer.clone())
    }

    pub fn mark_completed(&mut self) -> Result<(), ServiceError> {
        self.advance(GigStatus::Completed)
    }

    pub fn mark_reviewed(&mut self) -> Result<(), ServiceError> {
        self.advance(GigStatus::Reviewed)
    }

    fn advance(&mut self, to: GigStatus) -> Result<(), ServiceError> {
        self.ensure_transition(to)?;
        self.status = to;
        Ok(())
    }

    fn ensure_transition(&self, to: GigStatus) -> Result<(), ServiceError> {
        if self.status.next() != Some(to) {
            return Err(ServiceError::InvalidGigTransition {
                gig_id: self.id,
                from: self.status,
                to,
            });
        }
        Ok(())
    }

    /// At most one accepted offer, and `accepted_offer_id` points at it.
    pub fn offers_consistent(&self) -> bool {
        let accepted: Vec<&Offer> = self
            .offers
            .iter()
            .filter(|o| o.status == OfferStatus::Accepted)
            .collect();

        match (accepted.as_slice(), self.accepted_offer_id) {
            ([], None) => true,
            ([only], Some(id)) => only.id == id,
            _ => false,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_gig(customer_id: Uuid) -> Gig {
    Gig {
        id: Uuid::new_v4(),
        customer_id,
        customer_name: "John Doe".to_string(),
        title: "Fix leaking bathroom pipe".to_string(),
        description: "My bathroom sink has been leaking for 2 days. Need urgent help.".to_string(),
        category: GigCategory::Plumber,
        budget: Some(5000),
        location: "Tirana, Albania".to_string(),
        photos: Vec::new(),
        status: GigStatus::Open,
        created_at: Utc::now(),
        offers: Vec::new(),
        accepted_offer_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::offermodel::sample_offer;

    #[test]
    fn status_walks_forward_one_step_at_a_time() {
        let mut gig = sample_gig(Uuid::new_v4());
        let offer = sample_offer(gig.id, 4500);
        let offer_id = offer.id;
        gig.add_offer(offer).unwrap();

        let mut seen = vec![gig.status];
        gig.accept_offer(offer_id).unwrap();
        seen.push(gig.status);
        gig.mark_completed().unwrap();
        seen.push(gig.status);
        gig.mark_reviewed().unwrap();
        seen.push(gig.status);

        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(gig.status, GigStatus::Reviewed);
    }

    #[test]
    fn cannot_skip_or_regress() {
        let mut gig = sample_gig(Uuid::new_v4());
        assert!(matches!(
            gig.mark_reviewed(),
            Err(ServiceError::InvalidGigTransition { from: GigStatus::Open, .. })
        ));
        assert!(gig.mark_completed().is_err());
        assert_eq!(gig.status, GigStatus::Open);

        gig.status = GigStatus::Completed;
        let err = gig.accept_offer(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidGigTransition { to: GigStatus::Accepted, .. }));
        assert_eq!(gig.status, GigStatus::Completed);
    }

    #[test]
    fn accepting_declines_the_other_offers() {
        let mut gig = sample_gig(Uuid::new_v4());
        let cheap = sample_offer(gig.id, 4500);
        let pricey = sample_offer(gig.id, 5200);
        let cheap_id = cheap.id;
        gig.add_offer(pricey).unwrap();
        gig.add_offer(cheap).unwrap();

        let accepted = gig.accept_offer(cheap_id).unwrap();

        assert_eq!(accepted.status, OfferStatus::Accepted);
        assert_eq!(gig.accepted_offer_id, Some(cheap_id));
        assert_eq!(gig.pending_offer_count(), 0);
        assert!(gig.offers_consistent());
        assert_eq!(gig.accepted_offer().map(|o| o.price), Some(4500));
    }

    #[test]
    fn second_accept_is_refused() {
        let mut gig = sample_gig(Uuid::new_v4());
        let a = sample_offer(gig.id, 4500);
        let b = sample_offer(gig.id, 4700);
        let (a_id, b_id) = (a.id, b.id);
        gig.add_offer(a).unwrap();
        gig.add_offer(b).unwrap();

        gig.accept_offer(a_id).unwrap();
        assert!(gig.accept_offer(b_id).is_err());
        assert_eq!(gig.accepted_offer_id, Some(a_id));
        assert!(gig.offers_consistent());
    }

    #[test]
    fn offers_for_another_gig_or_closed_gig_are_refused() {
        let mut gig = sample_gig(Uuid::new_v4());
        let stray = sample_offer(Uuid::new_v4(), 1000);
        assert!(matches!(
            gig.add_offer(stray),
            Err(ServiceError::OfferGigMismatch { .. })
        ));

        gig.status = GigStatus::Accepted;
        let late = sample_offer(gig.id, 1000);
        assert!(matches!(gig.add_offer(late), Err(ServiceError::GigNotOpen(_, GigStatus::Accepted))));
        assert!(gig.offers.is_empty());
    }

    #[test]
    fn offers_sort_cheapest_first() {
        let mut gig = sample_gig(Uuid::new_v4());
        for price in [5200, 3900, 4500] {
            gig.add_offer(sample_offer(gig.id, price)).unwrap();
        }
        let prices: Vec<u64> = gig.offers_by_price().iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![3900, 4500, 5200]);
    }

    #[test]
    fn category_parses_ids_and_names() {
        assert_eq!(GigCategory::parse("plumber"), GigCategory::Plumber);
        assert_eq!(GigCategory::parse("Electrician"), GigCategory::Electrician);
        assert_eq!(GigCategory::parse("gardening"), GigCategory::Other);
    }
}
