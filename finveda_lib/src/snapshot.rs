use crate::account_kinds::AccountKind;
use crate::errors::Result;
use crate::ledger::Ledger;
use crate::transactions::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;

/// One line of the account summary handed to collaborators: enough to
/// reason about, not enough to identify the underlying account.
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AccountKind,

    pub balance: Decimal,
}

/// A read-only view for external collaborators such as an AI-insights
/// panel or a receipt scanner: every account in summary form plus the
/// most recent transactions.  Collaborators get no write path; anything
/// they want recorded must re-enter through [`Ledger::post`].
#[derive(Debug, Serialize)]
pub struct LedgerSnapshot {
    pub accounts: Vec<AccountSummary>,
    pub recent_transactions: Vec<Transaction>,
}

impl LedgerSnapshot {
    /// Capture the current state, bounding the transaction list to the
    /// `recent` most recent postings.
    pub fn new(ledger: &Ledger, recent: usize) -> Self {
        LedgerSnapshot {
            accounts: ledger
                .accounts()
                .iter_accounts()
                .map(|a| AccountSummary {
                    name: a.name.clone(),
                    kind: a.kind,
                    balance: a.balance,
                })
                .collect(),
            recent_transactions: ledger.transactions().recent(recent).cloned().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::accounts::AccountId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_snapshot_bounds_transactions() {
        let mut ledger = Ledger::seeded();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bank = AccountId::from_raw("acc-bank");
        let food = AccountId::from_raw("acc-exp-food");
        for n in 0..15 {
            ledger
                .post(&format!("coffee {n}"), day, dec!(3), &bank, &food)
                .unwrap();
        }

        let snapshot = LedgerSnapshot::new(&ledger, 10);
        assert_eq!(snapshot.recent_transactions.len(), 10);
        assert_eq!(snapshot.accounts.len(), 8);
        let oldest = snapshot.recent_transactions.first().unwrap();
        assert_eq!(oldest.description, "coffee 5");

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"Savings Bank\""));
        assert!(json.contains("\"ASSET\""));
    }
}
