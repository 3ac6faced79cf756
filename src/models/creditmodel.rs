use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CreditPackage {
    pub id: &'static str,
    pub credits: u32,
    /// Whole lek.
    pub price: u64,
    pub popular: bool,
    /// Percent saved against the starter rate.
    pub savings: Option<u8>,
}

impl CreditPackage {
    pub fn price_per_credit(&self) -> u64 {
        self.price / u64::from(self.credits.max(1))
    }
}

pub const CREDIT_PACKAGES: [CreditPackage; 4] = [
    CreditPackage { id: "starter", credits: 5, price: 500, popular: false, savings: None },
    CreditPackage { id: "popular", credits: 10, price: 900, popular: true, savings: Some(10) },
    CreditPackage { id: "pro", credits: 20, price: 1600, popular: false, savings: Some(20) },
    CreditPackage { id: "business", credits: 50, price: 3500, popular: false, savings: Some(30) },
];

pub fn find_package(id: &str) -> Option<&'static CreditPackage> {
    CREDIT_PACKAGES.iter().find(|p| p.id == id)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CreditTransactionKind {
    Purchase { package_id: String, price: u64 },
    Spent { gig_title: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreditTransaction {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Signed change to the balance.
    pub amount: i64,
    pub kind: CreditTransactionKind,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_rates() {
        let rates: Vec<u64> = CREDIT_PACKAGES.iter().map(|p| p.price_per_credit()).collect();
        assert_eq!(rates, vec![100, 90, 80, 70]);
        assert_eq!(find_package("popular").map(|p| p.credits), Some(10));
        assert!(find_package("gold").is_none());
    }
}
