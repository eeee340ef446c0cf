use crate::account_kinds::AccountKind;
use crate::ledger::Ledger;
use itertools::Itertools;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Aggregate balances per account kind, as shown on a dashboard.
/// Computed from a snapshot of the ledger; recompute after mutations.
#[derive(Debug)]
pub struct Stats {
    totals: HashMap<AccountKind, Decimal>,
}

impl Stats {
    pub fn new(ledger: &Ledger) -> Self {
        Stats {
            totals: ledger
                .accounts()
                .iter_accounts()
                .map(|a| (a.kind, a.balance))
                .into_grouping_map()
                .sum(),
        }
    }

    #[must_use]
    pub fn total(&self, kind: AccountKind) -> Decimal {
        self.totals.get(&kind).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn net_worth(&self) -> Decimal {
        self.total(AccountKind::Asset) - self.total(AccountKind::Liability)
    }

    /// How far the ledger is from the accounting equation
    ///    Assets = Liabilities + Equity + (Revenue - Expenses)
    /// Zero for any ledger built purely out of balanced postings on top
    /// of a balanced opening state.
    #[must_use]
    pub fn equation_gap(&self) -> Decimal {
        self.total(AccountKind::Asset)
            - self.total(AccountKind::Liability)
            - self.total(AccountKind::Equity)
            - self.total(AccountKind::Revenue)
            + self.total(AccountKind::Expense)
    }

    /// Kind/total pairs in the fixed taxonomy order, for display.
    pub fn iter_totals(&self) -> impl Iterator<Item = (AccountKind, Decimal)> + '_ {
        AccountKind::ALL.into_iter().map(|k| (k, self.total(k)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::accounts::AccountId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_seeded_ledger_balances_the_equation() {
        let stats = Stats::new(&Ledger::seeded());
        assert_eq!(stats.total(AccountKind::Asset), dec!(6000));
        assert_eq!(stats.total(AccountKind::Equity), dec!(6000));
        assert_eq!(stats.net_worth(), dec!(6000));
        assert_eq!(stats.equation_gap(), Decimal::ZERO);
    }

    #[test]
    fn test_postings_keep_the_equation_balanced() {
        let mut ledger = Ledger::seeded();
        ledger
            .post(
                "groceries",
                day(),
                dec!(82.40),
                &AccountId::from_raw("acc-bank"),
                &AccountId::from_raw("acc-exp-food"),
            )
            .unwrap();
        ledger
            .post(
                "salary",
                day(),
                dec!(2500),
                &AccountId::from_raw("acc-rev-salary"),
                &AccountId::from_raw("acc-bank"),
            )
            .unwrap();

        let stats = Stats::new(&ledger);
        assert_eq!(stats.equation_gap(), Decimal::ZERO);
        assert_eq!(stats.net_worth(), dec!(8417.60));
        assert_eq!(stats.total(AccountKind::Expense), dec!(82.40));
        assert_eq!(stats.total(AccountKind::Revenue), dec!(2500));
    }
}
