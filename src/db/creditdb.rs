// db/creditdb.rs
use uuid::Uuid;

use super::db::DBClient;
use crate::models::creditmodel::CreditTransaction;

pub trait CreditExt {
    fn record_credit_transaction(&self, transaction: CreditTransaction) -> CreditTransaction;

    /// Newest first.
    fn get_credit_transactions(&self, user_id: Uuid) -> Vec<CreditTransaction>;
}

impl CreditExt for DBClient {
    fn record_credit_transaction(&self, transaction: CreditTransaction) -> CreditTransaction {
        self.credit_transactions.borrow_mut().push(transaction.clone());
        transaction
    }

    fn get_credit_transactions(&self, user_id: Uuid) -> Vec<CreditTransaction> {
        self.credit_transactions
            .borrow()
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }
}
