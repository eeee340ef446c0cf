use finveda_lib::accounts::AccountId;
use finveda_lib::ledger::Ledger;
use itertools::Itertools;
use tabled::builder::Builder;
use tabled::settings::Style;

fn account_name(ledger: &Ledger, id: &AccountId) -> String {
    ledger
        .accounts()
        .get(id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| id.to_string())
}

pub fn transactions_view(ledger: &Ledger, recent: Option<usize>) -> String {
    let transactions: Vec<_> = match recent {
        Some(count) => ledger.transactions().recent(count).collect(),
        None => ledger.transactions().iter_transactions().collect(),
    };

    let mut builder = Builder::default();
    builder.push_record(["Date", "Description", "Amount", "From", "To", "Id"]);
    // The journal keeps insertion order; readers expect date order.
    for tx in transactions.into_iter().sorted_by_key(|tx| tx.date) {
        builder.push_record([
            tx.date.to_string(),
            tx.description.clone(),
            tx.debit.amount.to_string(),
            account_name(ledger, &tx.credit.account),
            account_name(ledger, &tx.debit.account),
            tx.id.to_string(),
        ]);
    }
    builder.build().with(Style::sharp()).to_string()
}
