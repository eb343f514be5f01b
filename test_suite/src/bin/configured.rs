use clap::{Arg, ArgAction};
use fmtparse::{FormattedParser, ParserConfig};
use test_suite::init_logging;

// Usage: configured CONFIG_JSON [ARGS...]
fn main() {
    init_logging();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_default();

    let config = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| serde_json::from_str::<ParserConfig>(&json).map_err(|e| e.to_string()));

    let config = match config {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}: {}", path, error);
            std::process::exit(1);
        }
    };

    let parser = FormattedParser::from_config(config)
        .and_then(|p| p.arg(Arg::new("verbose").short('v').action(ArgAction::SetTrue)))
        .and_then(|p| p.arg(Arg::new("name").long("name")));

    let parser = match parser {
        Ok(parser) => parser,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let matches = parser.parse_args_from(args);
    println!(
        "verbose={} name={}",
        matches.get_flag("verbose"),
        matches.get_one::<String>("name").map(String::as_str).unwrap_or("-")
    );
}
