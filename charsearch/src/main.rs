mod cli;
mod cmd_list;
mod cmd_search;

use cli::*;


fn command(subcommands: &[Subcommand]) -> Command {
    Command::new("charsearch")
        .about("Search Rick and Morty characters")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(arg_endpoint())
        .arg(arg_verbose())
        .subcommands(subcommands.iter().map(|(cmd, _)| cmd.clone()))
}

fn main() -> CliResult {
    let subcommands = [
        cmd_list::subcommand("list"),
        cmd_search::subcommand("search"),
    ];
    let matches = command(&subcommands).get_matches();

    let (name, matches) = matches.subcommand().unwrap();
    let (_, handler) = subcommands
        .iter()
        .find(|(cmd, _)| cmd.get_name() == name)
        .unwrap();
    handler(matches)
}
