// service/credit_service.rs
use std::rc::Rc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::{creditdb::CreditExt, db::DBClient, userdb::UserExt},
    models::{creditmodel::*, usermodel::*},
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct CreditService {
    db_client: Rc<DBClient>,
}

impl CreditService {
    pub fn new(db_client: Rc<DBClient>) -> Self {
        Self { db_client }
    }

    pub fn packages(&self) -> &'static [CreditPackage] {
        &CREDIT_PACKAGES
    }

    pub fn history(&self, user: &User) -> Vec<CreditTransaction> {
        self.db_client.get_credit_transactions(user.id)
    }

    /// Mock checkout: the package's credits land on the balance at once.
    pub fn purchase(&self, user: &User, package_id: &str) -> Result<User, ServiceError> {
        let package = find_package(package_id)
            .ok_or_else(|| ServiceError::PackageNotFound(package_id.to_string()))?;
        if !matches!(user.role, Some(UserRole::Customer | UserRole::Labor)) {
            return Err(ServiceError::WrongRole { required: UserRole::Labor });
        }

        let balance = user.credit_balance().saturating_add(package.credits);
        let updated = self.db_client.update_user(
            user.id,
            UserPatch { credits: Some(balance), ..Default::default() },
        )?;

        self.db_client.record_credit_transaction(CreditTransaction {
            id: Uuid::new_v4(),
            user_id: user.id,
            amount: i64::from(package.credits),
            kind: CreditTransactionKind::Purchase {
                package_id: package.id.to_string(),
                price: package.price,
            },
            created_at: Utc::now(),
        });

        tracing::info!(
            "User {} bought the {} package: {} -> {} credits",
            user.id,
            package.id,
            user.credit_balance(),
            balance
        );
        Ok(updated)
    }

    /// Takes `cost` credits for an offer on `gig_title`. Nothing changes when
    /// the balance is short.
    pub fn debit(&self, user: &User, cost: u32, gig_title: &str) -> Result<User, ServiceError> {
        let available = user.credit_balance();
        if available < cost {
            return Err(ServiceError::InsufficientCredits { required: cost, available });
        }

        let updated = self.db_client.update_user(
            user.id,
            UserPatch { credits: Some(available - cost), ..Default::default() },
        )?;
        if cost > 0 {
            self.db_client.record_credit_transaction(CreditTransaction {
                id: Uuid::new_v4(),
                user_id: user.id,
                amount: -i64::from(cost),
                kind: CreditTransactionKind::Spent { gig_title: gig_title.to_string() },
                created_at: Utc::now(),
            });
        }

        tracing::debug!("Debited {} credit(s) from user {}", cost, user.id);
        Ok(updated)
    }

    pub fn ensure_can_afford(&self, user: &User, cost: u32) -> Result<(), ServiceError> {
        let available = user.credit_balance();
        if available < cost {
            tracing::warn!("User {} has {} credits, needs {}", user.id, available, cost);
            return Err(ServiceError::InsufficientCredits { required: cost, available });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (Rc<DBClient>, CreditService) {
        let db = Rc::new(DBClient::new());
        (db.clone(), CreditService::new(db))
    }

    #[test]
    fn purchase_adds_credits_and_records_it() {
        let (db, service) = service();
        let pro = db.save_user(DemoAccount::Professional.user());

        let updated = service.purchase(&pro, "popular").unwrap();
        assert_eq!(updated.credits, Some(20));

        let history = service.history(&pro);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, 10);
        assert!(matches!(history[0].kind, CreditTransactionKind::Purchase { price: 900, .. }));
    }

    #[test]
    fn unknown_package_changes_nothing() {
        let (db, service) = service();
        let pro = db.save_user(DemoAccount::Professional.user());
        assert_eq!(
            service.purchase(&pro, "gold"),
            Err(ServiceError::PackageNotFound("gold".to_string()))
        );
        assert_eq!(db.get_user(pro.id).unwrap().credits, Some(10));
        assert!(service.history(&pro).is_empty());
    }

    #[test]
    fn debit_refuses_short_balance() {
        let (db, service) = service();
        let mut pro = DemoAccount::Professional.user();
        pro.credits = Some(0);
        let pro = db.save_user(pro);

        assert_eq!(
            service.debit(&pro, 1, "Fix leaking bathroom pipe"),
            Err(ServiceError::InsufficientCredits { required: 1, available: 0 })
        );
        assert_eq!(db.get_user(pro.id).unwrap().credits, Some(0));
    }

    #[test]
    fn debit_records_spend() {
        let (db, service) = service();
        let pro = db.save_user(DemoAccount::Professional.user());
        let updated = service.debit(&pro, 1, "Fix leaking bathroom pipe").unwrap();
        assert_eq!(updated.credits, Some(9));
        assert_eq!(service.history(&pro)[0].amount, -1);
    }
}
