use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// A convenient `Result` type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error in a parser operation.
///
/// Only `Usage` and `ArgsFile` are produced while parsing, the rest come
/// from building the parser or registering arguments.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The command-line tokens were rejected by the parsing engine.
    #[error("{0}")]
    Usage(String),

    /// The help flag was found in the command-line tokens.
    #[error("help requested")]
    HelpRequested,

    /// An argument file could not be read.
    #[error("{}: {source}", .path.display())]
    ArgsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Option strings already used by other arguments.
    #[error(
        "argument {argument}: conflicting option string{}: {}",
        plural(.options),
        .options.join(", ")
    )]
    Conflict {
        argument: String,
        options: Vec<String>,
    },

    /// An argument with the same id is already registered.
    #[error("argument {0}: conflicting argument id")]
    DuplicateId(String),

    /// No prefix characters were given.
    #[error("prefix characters cannot be empty")]
    InvalidPrefixChars,
}

fn plural(values: &[String]) -> &'static str {
    if values.len() == 1 {
        ""
    } else {
        "s"
    }
}

impl Error {
    /// Constructs an `Error::Usage` with the given message.
    ///
    /// # Example
    /// ```rust
    /// use fmtparse::{Error, ErrorKind};
    ///
    /// let error = Error::usage("the following required arguments were not provided: <DST>");
    /// assert_eq!(error.kind(), ErrorKind::Usage);
    /// ```
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Error::Usage(message.into())
    }

    /// Returns the `ErrorKind` of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) => ErrorKind::Usage,
            Error::HelpRequested => ErrorKind::HelpRequested,
            Error::ArgsFile { .. } => ErrorKind::ArgsFile,
            Error::Conflict { .. } | Error::DuplicateId(_) => ErrorKind::Conflict,
            Error::InvalidPrefixChars => ErrorKind::InvalidPrefixChars,
        }
    }

    /// Returns `true` if this error ends the process with the usage message.
    pub fn is_usage_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Usage | ErrorKind::ArgsFile)
    }
}

/// Types of errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed or missing command-line input.
    Usage,
    /// The user asked for help.
    HelpRequested,
    /// An argument file is missing or unreadable.
    ArgsFile,
    /// Two arguments claim the same option string or id.
    Conflict,
    /// The parser was configured without prefix characters.
    InvalidPrefixChars,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Usage => write!(f, "usage error"),
            ErrorKind::HelpRequested => write!(f, "help requested"),
            ErrorKind::ArgsFile => write!(f, "unreadable argument file"),
            ErrorKind::Conflict => write!(f, "conflicting argument"),
            ErrorKind::InvalidPrefixChars => write!(f, "invalid prefix characters"),
        }
    }
}

/// Extracts the message of an engine error, without the `error: ` prefix,
/// the engine usage and the trailing tips.
pub(crate) fn engine_message(error: &clap::Error) -> String {
    let rendered = error.render().to_string();
    let first = rendered.split("\n\n").next().unwrap_or_default();
    let message = first.strip_prefix("error: ").unwrap_or(first);
    message.trim_end().to_string()
}
