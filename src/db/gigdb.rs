// db/gigdb.rs
use uuid::Uuid;

use super::db::DBClient;
use crate::dtos::gigdtos::GigFilterDto;
use crate::models::gigmodel::*;
use crate::service::error::ServiceError;

pub trait GigExt {
    fn save_gig(&self, gig: Gig) -> Gig;

    fn get_gig(&self, gig_id: Uuid) -> Result<Gig, ServiceError>;

    /// Newest first.
    fn get_customer_gigs(&self, customer_id: Uuid) -> Vec<Gig>;

    /// Open gigs matching the browser filter, newest first.
    fn get_open_gigs(&self, filter: &GigFilterDto) -> Vec<Gig>;

    /// Gigs the professional has bid on.
    fn get_labor_gigs(&self, labor_id: Uuid) -> Vec<Gig>;

    /// Runs `change` against a copy of the gig and writes it back only when
    /// it succeeds.
    fn update_gig<T, F>(&self, gig_id: Uuid, change: F) -> Result<(Gig, T), ServiceError>
    where
        F: FnOnce(&mut Gig) -> Result<T, ServiceError>;

    fn get_gig_count(&self) -> usize;
}

impl GigExt for DBClient {
    fn save_gig(&self, gig: Gig) -> Gig {
        let mut gigs = self.gigs.borrow_mut();
        match gigs.iter_mut().find(|g| g.id == gig.id) {
            Some(existing) => *existing = gig.clone(),
            None => gigs.push(gig.clone()),
        }
        gig
    }

    fn get_gig(&self, gig_id: Uuid) -> Result<Gig, ServiceError> {
        self.gigs
            .borrow()
            .iter()
            .find(|g| g.id == gig_id)
            .cloned()
            .ok_or(ServiceError::GigNotFound(gig_id))
    }

    fn get_customer_gigs(&self, customer_id: Uuid) -> Vec<Gig> {
        self.gigs
            .borrow()
            .iter()
            .rev()
            .filter(|g| g.customer_id == customer_id)
            .cloned()
            .collect()
    }

    fn get_open_gigs(&self, filter: &GigFilterDto) -> Vec<Gig> {
        self.gigs
            .borrow()
            .iter()
            .rev()
            .filter(|g| g.status == GigStatus::Open && filter.matches(g))
            .cloned()
            .collect()
    }

    fn get_labor_gigs(&self, labor_id: Uuid) -> Vec<Gig> {
        self.gigs
            .borrow()
            .iter()
            .rev()
            .filter(|g| g.offers.iter().any(|o| o.labor_id == labor_id))
            .cloned()
            .collect()
    }

    fn update_gig<T, F>(&self, gig_id: Uuid, change: F) -> Result<(Gig, T), ServiceError>
    where
        F: FnOnce(&mut Gig) -> Result<T, ServiceError>,
    {
        let mut gigs = self.gigs.borrow_mut();
        let slot = gigs
            .iter_mut()
            .find(|g| g.id == gig_id)
            .ok_or(ServiceError::GigNotFound(gig_id))?;

        let mut draft = slot.clone();
        let out = change(&mut draft)?;
        *slot = draft.clone();
        Ok((draft, out))
    }

    fn get_gig_count(&self) -> usize {
        self.gigs.borrow().len()
    }
}
