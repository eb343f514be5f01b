use clap::{Arg, ArgAction};
use fmtparse::{FormattedParser, Result};
use test_suite::{init_logging, CP_DESCRIPTION, CP_USAGE};

fn parser() -> Result<FormattedParser> {
    FormattedParser::builder(CP_DESCRIPTION, CP_USAGE)
        .prog("cp")
        .fromfile_prefix_chars("@")
        .build()?
        .arg(Arg::new("force").short('f').long("force").action(ArgAction::SetTrue))?
        .arg(Arg::new("src").required(true))?
        .arg(Arg::new("dst").required(true))
}

fn main() {
    init_logging();

    let parser = match parser() {
        Ok(parser) => parser,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let matches = parser.parse_args();
    let src = matches.get_one::<String>("src").cloned().unwrap_or_default();
    let dst = matches.get_one::<String>("dst").cloned().unwrap_or_default();

    if src == dst && !matches.get_flag("force") {
        parser.error("SRC and DST are the same file");
    }

    println!("{} -> {}", src, dst);
}
