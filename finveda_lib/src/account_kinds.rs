use crate::transactions::EntryType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five root categories of a chart of accounts:
///    - Asset:     what the user owns (cash, bank accounts)
///    - Liability: what the user owes
///    - Equity:    what the world owes you (opening balances,...)
///    - Revenue:   income sources
///    - Expense:   spending categories
///
/// The category is fixed at account creation and decides the account's
/// balance polarity (see [`AccountKind::factor`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountKind {
    pub const ALL: [AccountKind; 5] = [
        AccountKind::Asset,
        AccountKind::Liability,
        AccountKind::Equity,
        AccountKind::Revenue,
        AccountKind::Expense,
    ];

    /// Whether a debit raises this account's natural balance.  Assets
    /// and expenses grow when debited; liabilities, equity and revenue
    /// grow when credited.
    fn debit_increases(self) -> bool {
        match self {
            AccountKind::Asset | AccountKind::Expense => true,
            AccountKind::Liability | AccountKind::Equity | AccountKind::Revenue => false,
        }
    }

    /// The signed weight an entry of the given direction applies to the
    /// balance of an account of this kind: +1 when it increases the
    /// natural balance, -1 when it decreases it.
    ///
    /// The two legs of any transaction carry the same magnitude, so
    /// weighting each leg by its own account's factor is what keeps
    ///    Assets = Liabilities + Equity + (Revenue - Expenses)
    /// balanced after every posting.
    #[must_use]
    pub fn factor(self, entry: EntryType) -> Decimal {
        match (self.debit_increases(), entry) {
            (true, EntryType::Debit) | (false, EntryType::Credit) => Decimal::ONE,
            (true, EntryType::Credit) | (false, EntryType::Debit) => -Decimal::ONE,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Asset => "Asset",
            AccountKind::Liability => "Liability",
            AccountKind::Equity => "Equity",
            AccountKind::Revenue => "Revenue",
            AccountKind::Expense => "Expense",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_polarity_table() {
        let plus = Decimal::ONE;
        let minus = -Decimal::ONE;

        assert_eq!(AccountKind::Asset.factor(EntryType::Debit), plus);
        assert_eq!(AccountKind::Asset.factor(EntryType::Credit), minus);
        assert_eq!(AccountKind::Expense.factor(EntryType::Debit), plus);
        assert_eq!(AccountKind::Expense.factor(EntryType::Credit), minus);

        assert_eq!(AccountKind::Liability.factor(EntryType::Debit), minus);
        assert_eq!(AccountKind::Liability.factor(EntryType::Credit), plus);
        assert_eq!(AccountKind::Equity.factor(EntryType::Debit), minus);
        assert_eq!(AccountKind::Equity.factor(EntryType::Credit), plus);
        assert_eq!(AccountKind::Revenue.factor(EntryType::Debit), minus);
        assert_eq!(AccountKind::Revenue.factor(EntryType::Credit), plus);
    }

    #[test]
    fn test_debit_and_credit_weights_cancel() {
        for kind in AccountKind::ALL {
            assert_eq!(
                kind.factor(EntryType::Debit),
                -kind.factor(EntryType::Credit),
                "debit and credit must pull {kind:?} in opposite directions",
            );
        }
    }
}
