use fmtparse::FormattedParser;
use test_suite::{init_logging, CP_DESCRIPTION, CP_USAGE};

// Calls `error` with the command-line as the message.
fn main() {
    init_logging();

    let parser = FormattedParser::new(CP_DESCRIPTION, CP_USAGE);
    let message = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
    parser.error(message);
}
