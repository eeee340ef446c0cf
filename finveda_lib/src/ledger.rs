use crate::account_kinds::AccountKind;
use crate::accounts::{Account, AccountCollection, AccountId};
use crate::errors::{Error, Result};
use crate::transactions::{EntryType, Transaction, TransactionCollection, TransactionId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The ledger service: owns the chart of accounts and the journal, and
/// is the only writer to either.  Construct one and pass it around;
/// there is no ambient singleton.
///
/// All operations are synchronous and run to completion, so `&mut self`
/// is the whole concurrency story.  A multi-actor deployment would need
/// to wrap `post`/`delete` in its own serializing lock.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: AccountCollection,
    transactions: TransactionCollection,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// The ledger a first-time user starts from: two funded asset
    /// accounts, the matching opening-balance equity, and a handful of
    /// empty expense and revenue categories.
    pub fn seeded() -> Self {
        let mut ledger = Ledger::default();
        let accounts = &mut ledger.accounts;
        accounts.add(Account::with_id(
            "acc-cash",
            "Cash",
            AccountKind::Asset,
            dec!(1000),
            Some("💵"),
        ));
        accounts.add(Account::with_id(
            "acc-bank",
            "Savings Bank",
            AccountKind::Asset,
            dec!(5000),
            Some("🏦"),
        ));
        // Double-entry bootstrap: the opening equity balances the two
        // asset balances above.
        accounts.add(Account::with_id(
            "acc-equity-opening",
            "Opening Balance",
            AccountKind::Equity,
            dec!(6000),
            Some("⚖️"),
        ));
        accounts.add(Account::with_id(
            "acc-exp-food",
            "Food & Dining",
            AccountKind::Expense,
            Decimal::ZERO,
            Some("🍔"),
        ));
        accounts.add(Account::with_id(
            "acc-exp-rent",
            "Rent",
            AccountKind::Expense,
            Decimal::ZERO,
            Some("🏠"),
        ));
        accounts.add(Account::with_id(
            "acc-exp-utils",
            "Utilities",
            AccountKind::Expense,
            Decimal::ZERO,
            Some("⚡"),
        ));
        accounts.add(Account::with_id(
            "acc-rev-salary",
            "Main Salary",
            AccountKind::Revenue,
            Decimal::ZERO,
            Some("💼"),
        ));
        accounts.add(Account::with_id(
            "acc-rev-gifts",
            "Gifts/Other",
            AccountKind::Revenue,
            Decimal::ZERO,
            Some("🎁"),
        ));
        ledger
    }

    /// Rebuild a ledger from previously saved collections.  The caller
    /// (the store) is trusted to hand back what it was given.
    pub(crate) fn from_parts(
        accounts: AccountCollection,
        transactions: TransactionCollection,
    ) -> Self {
        Ledger {
            accounts,
            transactions,
        }
    }

    #[must_use]
    pub fn accounts(&self) -> &AccountCollection {
        &self.accounts
    }

    #[must_use]
    pub fn transactions(&self) -> &TransactionCollection {
        &self.transactions
    }

    pub fn add_account(
        &mut self,
        name: &str,
        kind: AccountKind,
        emoji: Option<&str>,
    ) -> AccountId {
        let id = self.accounts.create(name, kind, emoji);
        log::debug!("created account {id} ({name})");
        id
    }

    /// Convenience for the banking view: a new income channel is just a
    /// revenue account.
    pub fn add_revenue_source(&mut self, name: &str, emoji: Option<&str>) -> AccountId {
        self.add_account(name, AccountKind::Revenue, emoji)
    }

    /// Record a movement of `amount` out of `from` and into `to`: the
    /// destination takes the debit leg, the source the credit leg, and
    /// each balance moves by `amount` weighted by its own account
    /// kind's polarity.
    ///
    /// Validation happens before any mutation, so on error the ledger
    /// is untouched.
    pub fn post(
        &mut self,
        description: &str,
        date: NaiveDate,
        amount: Decimal,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<TransactionId> {
        if description.trim().is_empty() {
            return Err(Error::MissingField("description"));
        }
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        if from == to {
            return Err(Error::MissingField("two distinct accounts"));
        }
        let to_kind = self
            .accounts
            .get(to)
            .ok_or_else(|| Error::AccountNotFound(to.clone()))?
            .kind;
        let from_kind = self
            .accounts
            .get(from)
            .ok_or_else(|| Error::AccountNotFound(from.clone()))?
            .kind;

        let tx = Transaction::new(description, date, amount, from, to);
        let id = tx.id.clone();
        self.transactions.append(tx)?;

        // Both accounts were resolved above, so neither adjustment can
        // fail and the posting is all-or-nothing to the caller.
        self.accounts
            .adjust_balance(to, amount * to_kind.factor(EntryType::Debit))?;
        self.accounts
            .adjust_balance(from, amount * from_kind.factor(EntryType::Credit))?;

        log::debug!("posted {id}: {description} {amount} {from} -> {to}");
        Ok(id)
    }

    /// Undo a posting: apply the negation of each leg's original
    /// balance effect, then drop the transaction from the journal.
    /// Afterwards every balance is exactly what it would have been had
    /// the transaction never existed.
    pub fn delete(&mut self, id: &TransactionId) -> Result<Transaction> {
        let tx = self
            .transactions
            .get(id)
            .ok_or_else(|| Error::TransactionNotFound(id.clone()))?;

        // Reversal deltas are gathered per entry before anything is
        // mutated.  Account kinds never change after creation, so
        // recomputing the factor now yields the factor used at posting
        // time.
        let mut reversals: Vec<(AccountId, Decimal)> = Vec::with_capacity(2);
        for entry in tx.iter_entries() {
            let kind = self
                .accounts
                .get(&entry.account)
                .ok_or_else(|| Error::AccountNotFound(entry.account.clone()))?
                .kind;
            reversals.push((entry.account.clone(), -(entry.amount * kind.factor(entry.kind))));
        }

        for (account, delta) in reversals {
            self.accounts.adjust_balance(&account, delta)?;
        }
        let removed = self.transactions.remove(id)?;
        log::debug!("deleted {id}: {}", removed.description);
        Ok(removed)
    }
}
