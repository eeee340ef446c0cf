pub mod account_kinds;
pub mod accounts;
pub mod errors;
pub mod ledger;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod transactions;
