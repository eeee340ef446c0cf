use crate::accounts::AccountId;
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw ledger direction of a journal entry, independent of the account
/// it lands on.  How a debit or credit moves a balance depends on the
/// account's kind (see [`crate::account_kinds::AccountKind::factor`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Debit,
    Credit,
}

impl EntryType {
    #[must_use]
    pub fn opposite(self) -> EntryType {
        match self {
            EntryType::Debit => EntryType::Credit,
            EntryType::Credit => EntryType::Debit,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        EntryId::new()
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new() -> Self {
        TransactionId(Uuid::new_v4().to_string())
    }

    pub fn from_raw(raw: &str) -> Self {
        TransactionId(raw.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        TransactionId::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One leg of a transaction.  GnuCash and KMyMoney call these splits,
/// Beancount and Ledger call them postings.
///
/// `description` and `date` duplicate the parent transaction's fields;
/// they carry no balance semantics and exist so a single leg can be
/// displayed on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,

    #[serde(rename = "accountId")]
    pub account: AccountId,

    // Magnitude only, never negative.  Direction comes from `kind`.
    pub amount: Decimal,

    #[serde(rename = "type")]
    pub kind: EntryType,

    pub description: String,
    pub date: NaiveDate,
}

/// An immutable double-entry transaction: a single amount moved from
/// the account behind `credit` to the account behind `debit`.  There is
/// no edit operation; a mistake is fixed by deleting and re-posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,

    // The two legs, by name rather than by position in a vector, so
    // nothing can ever depend on an ordering convention.
    pub debit: JournalEntry,
    pub credit: JournalEntry,
}

impl Transaction {
    pub fn new(
        description: &str,
        date: NaiveDate,
        amount: Decimal,
        from: &AccountId,
        to: &AccountId,
    ) -> Self {
        Transaction {
            id: TransactionId::new(),
            date,
            description: description.into(),
            debit: JournalEntry {
                id: EntryId::new(),
                account: to.clone(),
                amount,
                kind: EntryType::Debit,
                description: description.into(),
                date,
            },
            credit: JournalEntry {
                id: EntryId::new(),
                account: from.clone(),
                amount,
                kind: EntryType::Credit,
                description: description.into(),
                date,
            },
        }
    }

    pub fn iter_entries(&self) -> impl Iterator<Item = &JournalEntry> {
        [&self.debit, &self.credit].into_iter()
    }

    /// Check the per-transaction double-entry invariant: one debit and
    /// one credit of identical magnitude on two distinct accounts.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.debit.kind == EntryType::Debit
            && self.credit.kind == EntryType::Credit
            && self.debit.amount == self.credit.amount
            && self.debit.account != self.credit.account
    }
}

/// The journal: every posted transaction, in insertion order.  Callers
/// that want date order sort for themselves; the journal does not.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionCollection(Vec<Transaction>);

impl TransactionCollection {
    /// Should never fire given uuid ids, but the journal refuses to
    /// silently shadow an existing transaction.
    pub fn append(&mut self, tx: Transaction) -> Result<()> {
        if self.get(&tx.id).is_some() {
            return Err(Error::DuplicateId(tx.id.to_string()));
        }
        self.0.push(tx);
        Ok(())
    }

    pub fn remove(&mut self, id: &TransactionId) -> Result<Transaction> {
        let pos = self
            .0
            .iter()
            .position(|tx| tx.id == *id)
            .ok_or_else(|| Error::TransactionNotFound(id.clone()))?;
        Ok(self.0.remove(pos))
    }

    #[must_use]
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.0.iter().find(|tx| tx.id == *id)
    }

    pub fn iter_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.0.iter()
    }

    /// The most recent `count` transactions by insertion order, oldest
    /// of those first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &Transaction> {
        let skip = self.0.len().saturating_sub(count);
        self.0.iter().skip(skip)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_new_transaction_is_balanced() {
        let from = AccountId::from_raw("acc-bank");
        let to = AccountId::from_raw("acc-exp-food");
        let tx = Transaction::new("Starbucks", day(), dec!(450.50), &from, &to);

        assert!(tx.is_balanced());
        assert_eq!(tx.debit.account, to);
        assert_eq!(tx.credit.account, from);
        assert_eq!(tx.debit.amount, tx.credit.amount);
        assert_eq!(tx.debit.kind, tx.credit.kind.opposite());
        assert_ne!(tx.debit.id, tx.credit.id);
    }

    #[test]
    fn test_same_account_on_both_legs_is_unbalanced() {
        let acc = AccountId::from_raw("acc-cash");
        let tx = Transaction::new("oops", day(), dec!(1), &acc, &acc);
        assert!(!tx.is_balanced());
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut journal = TransactionCollection::default();
        let from = AccountId::from_raw("a");
        let to = AccountId::from_raw("b");
        let tx = Transaction::new("once", day(), dec!(1), &from, &to);
        let dup = tx.clone();

        journal.append(tx).unwrap();
        assert!(matches!(journal.append(dup), Err(Error::DuplicateId(_))));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_remove_returns_the_transaction() {
        let mut journal = TransactionCollection::default();
        let from = AccountId::from_raw("a");
        let to = AccountId::from_raw("b");
        let tx = Transaction::new("gone", day(), dec!(2), &from, &to);
        let id = tx.id.clone();
        journal.append(tx).unwrap();

        let removed = journal.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(journal.is_empty());
        assert!(matches!(
            journal.remove(&id),
            Err(Error::TransactionNotFound(_))
        ));
    }

    #[test]
    fn test_recent_keeps_insertion_order() {
        let mut journal = TransactionCollection::default();
        let from = AccountId::from_raw("a");
        let to = AccountId::from_raw("b");
        for label in ["one", "two", "three"] {
            journal
                .append(Transaction::new(label, day(), dec!(1), &from, &to))
                .unwrap();
        }
        let recent: Vec<&str> = journal
            .recent(2)
            .map(|tx| tx.description.as_str())
            .collect();
        assert_eq!(recent, ["two", "three"]);
    }
}
