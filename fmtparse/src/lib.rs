//! # fmtparse
//!
//! A command-line parser for programs that ship their own help text.
//!
//! The arguments are declared and parsed with [`clap`], but the messages shown
//! to the user are never generated: the caller gives a `description` and a
//! `usage` string and those are printed as they are.
//!
//! - usage: `usage`
//! - help: `"\n" + description + "\n" + usage`
//! - error: `"error: {message}\n\n" + usage`, then the process exits with code `2`
//!
//! All the messages go to `stderr`.
//!
//! ## Parsing the arguments
//! ```no_run
//! use fmtparse::FormattedParser;
//! use clap::{Arg, ArgAction};
//!
//! const DESCRIPTION: &str = "Copies SRC to DST.";
//! const USAGE: &str = "usage: cp [-f] SRC DST
//!
//!   -f, --force   overwrite DST if it exists
//!   -h, --help    show this help message and exit
//! ";
//!
//! let parser = FormattedParser::new(DESCRIPTION, USAGE)
//!     .arg(Arg::new("force").short('f').long("force").action(ArgAction::SetTrue))
//!     .and_then(|p| p.arg(Arg::new("src").required(true)))
//!     .and_then(|p| p.arg(Arg::new("dst").required(true)))
//!     .unwrap_or_else(|e| panic!("{}", e));
//!
//! // Exits with code 2 on a bad command-line, and 0 after printing the help.
//! let matches = parser.parse_args();
//!
//! let src = matches.get_one::<String>("src").unwrap();
//! let dst = matches.get_one::<String>("dst").unwrap();
//!
//! if src == dst {
//!     parser.error("SRC and DST are the same file");
//! }
//! ```
//!
//! ## Configuration
//! The pass-through options (program name, prefix characters, argument files,
//! conflict policy...) are set with a [`ParserBuilder`] or loaded as a
//! [`ParserConfig`], which can be deserialized with the `serde` feature.

mod config;
pub use config::*;

mod error;
pub use error::{Error, ErrorKind, Result};

mod parser;
pub use parser::*;

/// Output of the usage, help and error messages.
pub mod help;

/// Arguments registered in a parser.
pub mod registry;
pub use registry::ArgumentRegistry;

/// Custom option prefixes.
pub mod prefix;

/// Argument files.
pub mod fromfile;
