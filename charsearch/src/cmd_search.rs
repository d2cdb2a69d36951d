use std::io::IsTerminal;
use anyhow::Context;
use charsearch_core::Suggestion;
use crate::cli::*;

pub fn subcommand(name: &'static str) -> Subcommand {
    let cmd = Command::new(name)
        .about("List characters whose name contains a string")
        .arg(Arg::new("query")
            .required(true)
            .num_args(1..)
            .help("Text to search, case-insensitive (words are joined with spaces)"))
        .arg(Arg::new("plain")
            .short('p')
            .long("plain")
            .action(ArgAction::SetTrue)
            .help("Don't highlight matches, even on a terminal"))
        .arg(arg_json())
        ;
    (cmd, handle)
}

fn handle(matches: &ArgMatches) -> CliResult {
    let words: Vec<&str> = matches.get_many::<String>("query").unwrap().map(|s| s.as_str()).collect();
    let query = words.join(" ");
    // Same normalization as the search input
    let query = query.trim_start();

    let suggestions = if query.is_empty() {
        // Nothing to match, don't query the API
        log_verbose(matches, || "empty query, nothing to search".to_string());
        Vec::new()
    } else {
        let client = client_from_matches(matches)?;
        log_verbose(matches, || format!("searching {:?} on {}", query, client.url()));
        client.search(query).context("failed to fetch characters")?
    };
    log_verbose(matches, || format!("{} matching characters", suggestions.len()));

    if matches.get_flag("json") {
        let values: Vec<_> = suggestions.iter().map(suggestion_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        let ansi = !matches.get_flag("plain") && std::io::stdout().is_terminal();
        for suggestion in &suggestions {
            println!("{}\t{}", suggestion.id, format_suggestion(suggestion, ansi));
        }
    }
    Ok(())
}

/// Format a suggestion name, with the match in bold if `ansi` is set
fn format_suggestion(suggestion: &Suggestion, ansi: bool) -> String {
    if !ansi {
        return suggestion.text().to_string();
    }
    suggestion.segments()
        .map(|seg| if seg.is_match {
            format!("\x1b[1m{}\x1b[22m", seg.text)
        } else {
            seg.text.to_string()
        })
        .collect()
}

fn suggestion_to_json(suggestion: &Suggestion) -> serde_json::Value {
    let span = suggestion.span();
    serde_json::json!({
        "id": suggestion.id,
        "name": suggestion.name,
        "match": [span.start, span.end],
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use charsearch_core::{CharacterRecord, filter_and_highlight};

    fn rick(query: &str) -> Suggestion {
        let records = [CharacterRecord::new("1", "Rick Sanchez")];
        filter_and_highlight(&records, query).remove(0)
    }

    #[test]
    fn format_with_ansi() {
        assert_eq!(format_suggestion(&rick("sanch"), true), "Rick \x1b[1mSanch\x1b[22mez");
        assert_eq!(format_suggestion(&rick("sanch"), false), "Rick Sanchez");
    }

    #[test]
    fn json_output() {
        assert_eq!(suggestion_to_json(&rick("ri")), serde_json::json!({
            "id": "1",
            "name": "Rick Sanchez",
            "match": [0, 2],
        }));
    }

    #[test]
    fn blank_query_is_not_fetched() {
        // Nothing listens on port 1: any request would fail
        let (cmd, handle) = subcommand("search");
        let cmd = cmd.arg(arg_endpoint()).arg(arg_verbose());
        let matches = cmd.clone()
            .try_get_matches_from(["search", "  ", "--json", "--endpoint", "http://127.0.0.1:1/"])
            .unwrap();
        assert!(handle(&matches).is_ok());

        let matches = cmd
            .try_get_matches_from(["search", "rick", "--endpoint", "http://127.0.0.1:1/"])
            .unwrap();
        assert!(handle(&matches).is_err());
    }

    #[test]
    fn command_is_valid() {
        let (cmd, _) = subcommand("search");
        cmd.debug_assert();
    }
}
