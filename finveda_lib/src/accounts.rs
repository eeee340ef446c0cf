use crate::account_kinds::AccountKind;
use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable account identifier.  Freshly created accounts get a
/// random uuid-backed id; the starting chart of accounts uses fixed
/// slugs ("acc-cash", ...) so that saved files stay recognizable.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new() -> Self {
        AccountId(format!("acc-{}", Uuid::new_v4()))
    }

    pub fn from_raw(raw: &str) -> Self {
        AccountId(raw.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        AccountId::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Either an actual bank account or a category.  The balance is the
/// account's natural balance for its kind (an asset balance grows with
/// debits, a revenue balance with credits) and is maintained solely by
/// the posting engine; nothing else writes to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    // Short name as displayed to users.  Not unique; the id is.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AccountKind,

    pub balance: Decimal,

    // Purely cosmetic.
    pub emoji: Option<String>,
}

impl Account {
    pub fn new(name: &str, kind: AccountKind, emoji: Option<&str>) -> Self {
        Account {
            id: AccountId::new(),
            name: name.into(),
            kind,
            balance: Decimal::ZERO,
            emoji: emoji.map(str::to_string),
        }
    }

    /// Used for the seed chart of accounts, which ships with fixed ids
    /// and opening balances.
    pub fn with_id(
        id: &str,
        name: &str,
        kind: AccountKind,
        balance: Decimal,
        emoji: Option<&str>,
    ) -> Self {
        Account {
            id: AccountId::from_raw(id),
            name: name.into(),
            kind,
            balance,
            emoji: emoji.map(str::to_string),
        }
    }
}

/// The chart of accounts, in insertion order.  Accounts are never
/// removed; only their balance ever changes after creation.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCollection(Vec<Account>);

impl AccountCollection {
    pub fn add(&mut self, account: Account) -> AccountId {
        let id = account.id.clone();
        self.0.push(account);
        id
    }

    pub fn create(&mut self, name: &str, kind: AccountKind, emoji: Option<&str>) -> AccountId {
        self.add(Account::new(name, kind, emoji))
    }

    #[must_use]
    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.0.iter().find(|a| a.id == *id)
    }

    /// Look an account up by id or, failing that, by exact name.  Meant
    /// for interactive callers; programmatic callers should keep ids.
    #[must_use]
    pub fn find(&self, name_or_id: &str) -> Option<&Account> {
        self.0
            .iter()
            .find(|a| a.id.as_str() == name_or_id)
            .or_else(|| self.0.iter().find(|a| a.name == name_or_id))
    }

    pub fn iter_accounts(&self) -> impl Iterator<Item = &Account> {
        self.0.iter()
    }

    pub fn iter_by_kind(&self, kind: AccountKind) -> impl Iterator<Item = &Account> + '_ {
        self.0.iter().filter(move |a| a.kind == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add `delta` to an account's balance.  Only the posting engine
    /// calls this; the sign of `delta` is entirely the caller's
    /// responsibility.
    pub(crate) fn adjust_balance(&mut self, id: &AccountId, delta: Decimal) -> Result<()> {
        let acc = self
            .0
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or_else(|| Error::AccountNotFound(id.clone()))?;
        acc.balance += delta;
        Ok(())
    }
}
