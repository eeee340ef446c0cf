use clap::{arg, Arg, ArgMatches};
use std::path::PathBuf;

pub struct GlobalSettings {
    // Where the ledger blob lives on disk.
    pub file: PathBuf,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [arg!(--file [FILE] "Path of the ledger file")
            .global(true)
            .default_value("finveda.json")]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            file: args
                .get_one::<String>("file")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("finveda.json")),
        }
    }
}
