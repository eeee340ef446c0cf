mod accounts_view;
mod args;
mod global_settings;
mod stats_view;
mod transactions_view;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use finveda_lib::accounts::AccountId;
use finveda_lib::ledger::Ledger;
use finveda_lib::snapshot::LedgerSnapshot;
use finveda_lib::stats::Stats;
use finveda_lib::store::Store;
use finveda_lib::transactions::TransactionId;
use global_settings::GlobalSettings;
use rust_decimal::Decimal;
use std::str::FromStr;

fn resolve_account(ledger: &Ledger, name_or_id: &str) -> Result<AccountId> {
    ledger
        .accounts()
        .find(name_or_id)
        .map(|a| a.id.clone())
        .ok_or_else(|| anyhow!("unknown account {name_or_id:?}"))
}

fn parse_date(date: Option<&String>) -> Result<NaiveDate> {
    match date {
        None => Ok(Local::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD")),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = args::build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);
    let store = Store::new(&settings.file);
    let (mut ledger, theme) = store.load()?;
    log::debug!("ledger file: {}", settings.file.display());

    match matches.subcommand() {
        Some(("accounts", _)) => {
            println!("{}", accounts_view::accounts_view(&ledger));
        }
        Some(("transactions", sub)) => {
            let recent = sub.get_one::<usize>("recent").copied();
            println!("{}", transactions_view::transactions_view(&ledger, recent));
        }
        Some(("post", sub)) => {
            let description = sub.get_one::<String>("DESCRIPTION").unwrap();
            let amount = sub.get_one::<String>("AMOUNT").unwrap();
            let amount = Decimal::from_str(amount)
                .with_context(|| format!("invalid amount {amount:?}"))?;
            let date = parse_date(sub.get_one::<String>("date"))?;
            let from = resolve_account(&ledger, sub.get_one::<String>("from").unwrap())?;
            let to = resolve_account(&ledger, sub.get_one::<String>("to").unwrap())?;

            let id = ledger.post(description, date, amount, &from, &to)?;
            store.save(&ledger, theme)?;
            println!("posted {id}");
        }
        Some(("delete", sub)) => {
            let id = TransactionId::from_raw(sub.get_one::<String>("ID").unwrap());
            let removed = ledger.delete(&id)?;
            store.save(&ledger, theme)?;
            println!(
                "deleted {} ({} of {})",
                removed.id, removed.description, removed.debit.amount,
            );
        }
        Some(("add-source", sub)) => {
            let name = sub.get_one::<String>("NAME").unwrap();
            let emoji = sub.get_one::<String>("emoji").map(String::as_str);
            let id = ledger.add_revenue_source(name, emoji);
            store.save(&ledger, theme)?;
            println!("added revenue source {id}");
        }
        Some(("stats", _)) => {
            print!("{}", stats_view::stats_view(&Stats::new(&ledger)));
        }
        Some(("snapshot", sub)) => {
            let recent = sub.get_one::<usize>("recent").copied().unwrap_or(10);
            println!("{}", LedgerSnapshot::new(&ledger, recent).to_json()?);
        }
        Some(("completions", sub)) => {
            if let Some(shell) = sub.get_one::<clap_complete_command::Shell>("shell") {
                shell.generate(&mut args::build_cli(), &mut std::io::stdout());
            }
        }
        Some((_, _)) | None => unreachable!("subcommand is required"),
    }
    Ok(())
}
