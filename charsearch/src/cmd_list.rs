use anyhow::Context;
use crate::cli::*;

pub fn subcommand(name: &'static str) -> Subcommand {
    let cmd = Command::new(name)
        .about("List all characters")
        .arg(arg_json())
        ;
    (cmd, handle)
}

fn handle(matches: &ArgMatches) -> CliResult {
    let client = client_from_matches(matches)?;
    log_verbose(matches, || format!("fetching characters from {}", client.url()));
    let records = client.fetch_all().context("failed to fetch characters")?;
    log_verbose(matches, || format!("{} characters fetched", records.len()));

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in records {
            println!("{}\t{}", record.id, record.name);
        }
    }
    Ok(())
}
