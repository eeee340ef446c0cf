use crate::accounts::AccountCollection;
use crate::errors::Result;
use crate::ledger::Ledger;
use crate::transactions::TransactionCollection;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display theme.  It travels with the saved file because the UI wants
/// it back on startup, but nothing in the core ever reads it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Midnight,
    Emerald,
    Sunset,
}

#[derive(Deserialize)]
struct SavedState {
    accounts: AccountCollection,
    transactions: TransactionCollection,

    #[serde(default)]
    theme: Theme,
}

#[derive(Serialize)]
struct SavedStateRef<'a> {
    accounts: &'a AccountCollection,
    transactions: &'a TransactionCollection,
    theme: Theme,
}

/// Whole-ledger save/load against a single JSON file.  There is no
/// incremental update; every save rewrites the full state, mirroring a
/// browser's local-storage blob.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl AsRef<std::path::Path>) -> Self {
        Store {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the saved ledger, or seed a fresh one when no file exists
    /// yet.  A present-but-corrupt file is an error, not a reseed.
    pub fn load(&self) -> Result<(Ledger, Theme)> {
        if !self.path.exists() {
            log::info!("no ledger at {}, starting fresh", self.path.display());
            return Ok((Ledger::seeded(), Theme::default()));
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let saved: SavedState = serde_json::from_str(&raw)?;
        log::debug!(
            "loaded {} accounts, {} transactions from {}",
            saved.accounts.len(),
            saved.transactions.len(),
            self.path.display(),
        );
        Ok((
            Ledger::from_parts(saved.accounts, saved.transactions),
            saved.theme,
        ))
    }

    pub fn save(&self, ledger: &Ledger, theme: Theme) -> Result<()> {
        let raw = serde_json::to_string_pretty(&SavedStateRef {
            accounts: ledger.accounts(),
            transactions: ledger.transactions(),
            theme,
        })?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::accounts::AccountId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn new() -> Self {
            TempFile(
                std::env::temp_dir().join(format!("finveda-test-{}.json", uuid::Uuid::new_v4())),
            )
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_missing_file_seeds() {
        let file = TempFile::new();
        let store = Store::new(&file.0);
        let (ledger, theme) = store.load().unwrap();
        assert_eq!(ledger.accounts().len(), 8);
        assert!(ledger.transactions().is_empty());
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let file = TempFile::new();
        let store = Store::new(&file.0);

        let mut ledger = Ledger::seeded();
        let day = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        ledger
            .post(
                "flowers",
                day,
                dec!(35.90),
                &AccountId::from_raw("acc-cash"),
                &AccountId::from_raw("acc-exp-food"),
            )
            .unwrap();
        store.save(&ledger, Theme::Midnight).unwrap();

        let (reloaded, theme) = store.load().unwrap();
        assert_eq!(theme, Theme::Midnight);
        assert_eq!(reloaded.transactions().len(), 1);
        assert_eq!(
            reloaded
                .accounts()
                .get(&AccountId::from_raw("acc-cash"))
                .unwrap()
                .balance,
            dec!(964.10),
        );
        let tx = reloaded.transactions().iter_transactions().next().unwrap();
        assert!(tx.is_balanced());
        assert_eq!(tx.date, day);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let file = TempFile::new();
        std::fs::write(&file.0, "not json").unwrap();
        let store = Store::new(&file.0);
        assert!(store.load().is_err());
    }
}
