//! Helpers for building clap commands
use anyhow::{Context, Result};
use charsearch_client::CharacterClient;
pub use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

pub type CliResult = std::result::Result<(), Box<dyn std::error::Error>>;
pub type Subcommand = (Command, fn(&ArgMatches) -> CliResult);

pub fn arg_endpoint() -> Arg {
    Arg::new("endpoint")
        .short('e')
        .long("endpoint")
        .env("CHARSEARCH_ENDPOINT")
        .value_name("url")
        .global(true)
        .help("GraphQL endpoint of the character API")
}

pub fn arg_verbose() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Print diagnostics on stderr")
}

pub fn arg_json() -> Arg {
    Arg::new("json")
        .short('j')
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output a JSON array")
}

/// Build a client from the `endpoint` arg, or use the default endpoint
pub fn client_from_matches(matches: &ArgMatches) -> Result<CharacterClient> {
    match matches.get_one::<String>("endpoint") {
        Some(url) => CharacterClient::from_url(url).with_context(|| format!("invalid endpoint {}", url)),
        None => Ok(CharacterClient::new()?),
    }
}

/// Print a diagnostic message if `verbose` is set
pub fn log_verbose(matches: &ArgMatches, msg: impl FnOnce() -> String) {
    if matches.get_flag("verbose") {
        eprintln!("{}", msg());
    }
}
