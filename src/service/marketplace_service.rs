// service/marketplace_service.rs
//! Gig lifecycle: posting, bidding, choosing a professional, finishing the
//! job and reviewing it.

use std::rc::Rc;

use uuid::Uuid;

use crate::{
    db::{db::DBClient, gigdb::GigExt, reviewdb::ReviewExt},
    dtos::{gigdtos::*, offerdtos::SendOfferDto, reviewdtos::LeaveReviewDto},
    models::{gigmodel::*, offermodel::Offer, reviewmodel::Review, usermodel::*},
    service::{
        credit_service::CreditService, ensure_role, error::ServiceError,
        notification_service::NotificationService,
    },
    utils::validation::validate_dto,
};

#[derive(Debug, Clone)]
pub struct MarketplaceService {
    db_client: Rc<DBClient>,
    credit_service: Rc<CreditService>,
    notification_service: Rc<NotificationService>,
    offer_credit_cost: u32,
}

/// Result of a successful offer: the offer, the gig it joined and the
/// professional's balance after the debit.
#[derive(Debug, Clone, PartialEq)]
pub struct SentOffer {
    pub offer: Offer,
    pub gig: Gig,
    pub labor: User,
}

impl MarketplaceService {
    pub fn new(
        db_client: Rc<DBClient>,
        credit_service: Rc<CreditService>,
        notification_service: Rc<NotificationService>,
        offer_credit_cost: u32,
    ) -> Self {
        Self {
            db_client,
            credit_service,
            notification_service,
            offer_credit_cost,
        }
    }

    pub fn offer_credit_cost(&self) -> u32 {
        self.offer_credit_cost
    }

    pub fn gig(&self, gig_id: Uuid) -> Result<Gig, ServiceError> {
        self.db_client.get_gig(gig_id)
    }

    pub fn customer_gigs(&self, customer: &User) -> Vec<Gig> {
        self.db_client.get_customer_gigs(customer.id)
    }

    pub fn labor_gigs(&self, labor: &User) -> Vec<Gig> {
        self.db_client.get_labor_gigs(labor.id)
    }

    pub fn browse_gigs(&self, filter: &GigFilterDto) -> Vec<Gig> {
        self.db_client.get_open_gigs(filter)
    }

    pub fn create_gig(&self, customer: &User, dto: CreateGigDto) -> Result<Gig, ServiceError> {
        ensure_role(customer, UserRole::Customer)?;
        validate_dto(&dto)?;

        let gig = self.db_client.save_gig(dto.into_gig(customer));
        tracing::info!("Gig {} posted by {}: {}", gig.id, customer.id, gig.title);
        Ok(gig)
    }

    /// Checks the balance first so a short balance never leaves a stray offer.
    pub fn send_offer(&self, labor: &User, gig_id: Uuid, dto: SendOfferDto) -> Result<SentOffer, ServiceError> {
        ensure_role(labor, UserRole::Labor)?;
        validate_dto(&dto)?;
        self.credit_service.ensure_can_afford(labor, self.offer_credit_cost)?;

        let rating = self.db_client.get_labor_rating(labor.id);
        let current = self.db_client.get_gig(gig_id)?;
        let offer = dto.into_offer(&current, labor, rating);

        let (gig, ()) = self.db_client.update_gig(gig_id, |g| g.add_offer(offer.clone()))?;
        let labor = self.credit_service.debit(labor, self.offer_credit_cost, &gig.title)?;

        tracing::info!(
            "Offer {} sent on gig {} for {} lek; {} credits left",
            offer.id,
            gig.id,
            offer.price,
            labor.credit_balance()
        );
        self.notification_service.notify_new_offer(&gig, &offer)?;
        self.notification_service.notify_low_credits(&labor)?;

        Ok(SentOffer { offer, gig, labor })
    }

    pub fn accept_offer(&self, customer: &User, gig_id: Uuid, offer_id: Uuid) -> Result<(Gig, Offer), ServiceError> {
        self.owned_gig(customer, gig_id)?;
        let (gig, offer) = self.db_client.update_gig(gig_id, |g| g.accept_offer(offer_id))?;

        tracing::info!("Gig {} accepted offer {} from {}", gig.id, offer.id, offer.labor_name);
        self.notification_service.notify_offer_accepted(&gig, &offer)?;
        Ok((gig, offer))
    }

    pub fn reject_offer(&self, customer: &User, gig_id: Uuid, offer_id: Uuid) -> Result<Gig, ServiceError> {
        self.owned_gig(customer, gig_id)?;
        let (gig, offer) = self.db_client.update_gig(gig_id, |g| g.reject_offer(offer_id))?;
        tracing::info!("Gig {} declined offer {}", gig.id, offer.id);
        Ok(gig)
    }

    /// Either the customer or the hired professional can close the job.
    pub fn mark_complete(&self, user: &User, gig_id: Uuid) -> Result<Gig, ServiceError> {
        let current = self.db_client.get_gig(gig_id)?;
        let is_owner = current.customer_id == user.id;
        let is_hired = current.accepted_offer().map_or(false, |o| o.labor_id == user.id);
        if !is_owner && !is_hired {
            return Err(ServiceError::UnauthorizedGigAccess(user.id, gig_id));
        }

        let (gig, ()) = self.db_client.update_gig(gig_id, Gig::mark_completed)?;
        tracing::info!("Gig {} marked complete by {}", gig.id, user.id);
        self.notification_service.notify_job_completed(&gig, user)?;
        Ok(gig)
    }

    /// The review goes to the professional whose offer was accepted.
    pub fn submit_review(&self, customer: &User, gig_id: Uuid, dto: LeaveReviewDto) -> Result<(Gig, Review), ServiceError> {
        validate_dto(&dto)?;
        self.owned_gig(customer, gig_id)?;
        if self.db_client.get_gig_review(gig_id).is_some() {
            return Err(ServiceError::DuplicateReview(gig_id));
        }

        let (gig, labor_id) = self.db_client.update_gig(gig_id, |g| {
            let labor_id = g
                .accepted_offer()
                .map(|o| o.labor_id)
                .ok_or_else(|| ServiceError::Other(format!("Gig {} has no accepted offer", g.id)))?;
            g.mark_reviewed()?;
            Ok(labor_id)
        })?;

        let review = self
            .db_client
            .save_review(dto.into_review(&gig, customer, labor_id))?;
        tracing::info!("Gig {} reviewed: {} stars for {}", gig.id, review.rating, labor_id);
        self.notification_service.notify_new_review(&gig, &review)?;
        Ok((gig, review))
    }

    fn owned_gig(&self, customer: &User, gig_id: Uuid) -> Result<Gig, ServiceError> {
        ensure_role(customer, UserRole::Customer)?;
        let gig = self.db_client.get_gig(gig_id)?;
        if gig.customer_id != customer.id {
            return Err(ServiceError::UnauthorizedGigAccess(customer.id, gig_id));
        }
        Ok(gig)
    }
}
