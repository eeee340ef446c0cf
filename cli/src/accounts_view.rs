use finveda_lib::ledger::Ledger;
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn accounts_view(ledger: &Ledger) -> String {
    let mut builder = Builder::default();
    builder.push_record(["", "Account", "Kind", "Balance", "Id"]);
    for acc in ledger.accounts().iter_accounts() {
        builder.push_record([
            acc.emoji.clone().unwrap_or_default(),
            acc.name.clone(),
            acc.kind.label().to_string(),
            acc.balance.to_string(),
            acc.id.to_string(),
        ]);
    }
    builder.build().with(Style::sharp()).to_string()
}
