use crate::global_settings::GlobalSettings;
use clap::{arg, Arg, Command};

pub(crate) fn build_cli() -> Command {
    Command::new("finveda")
        .version("0.1")
        .about("Track personal finances with a double-entry ledger")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(Command::new("accounts").about("Show the chart of accounts"))
        .subcommand(
            Command::new("transactions")
                .about("Show the transaction ledger, oldest first")
                .arg(
                    arg!(-n --recent [COUNT] "Only the COUNT most recent transactions")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("post")
                .about("Record a transaction")
                .arg(arg!(<DESCRIPTION> "What the money moved for"))
                .arg(arg!(<AMOUNT> "Positive decimal amount"))
                .arg(arg!(--from <ACCOUNT> "Account the money leaves (credit leg)"))
                .arg(arg!(--to <ACCOUNT> "Account the money enters (debit leg)"))
                .arg(arg!(-d --date [DATE] "Transaction date as YYYY-MM-DD, today if omitted")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a transaction and reverse its balance effect")
                .arg(arg!(<ID> "Transaction id, as shown by `finveda transactions`")),
        )
        .subcommand(
            Command::new("add-source")
                .about("Add a revenue source (a new income channel)")
                .arg(arg!(<NAME> "Display name of the source"))
                .arg(arg!(--emoji [EMOJI] "Cosmetic emoji for the account")),
        )
        .subcommand(Command::new("stats").about("Show totals per account kind"))
        .subcommand(
            Command::new("snapshot")
                .about("Print the read-only JSON summary handed to assistants")
                .arg(
                    arg!(-n --recent [COUNT] "Bound the transaction list")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                ),
        )
        .subcommand(
            // Use    eval "$(finveda completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
