use console::style;
use finveda_lib::stats::Stats;

pub fn stats_view(stats: &Stats) -> String {
    let mut out = String::new();
    for (kind, total) in stats.iter_totals() {
        out.push_str(&format!("{:<13} {}\n", kind.label(), total));
    }
    out.push_str(&format!(
        "{:<13} {}\n",
        "Net worth",
        style(stats.net_worth()).bold(),
    ));
    // Non-zero only if the saved file was edited by hand.
    out.push_str(&format!("{:<13} {}\n", "Equation gap", stats.equation_gap()));
    out
}
