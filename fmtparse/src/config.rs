#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The constructor inputs of a `FormattedParser`.
///
/// `description` and `usage` are required and printed verbatim, everything
/// else is passed through to the parsing engine.
///
/// # Example
/// ```rust
/// use fmtparse::{ConflictHandler, ParserConfig};
///
/// let config = ParserConfig::new("Copies files.", "cp SRC DST")
///     .prog("cp")
///     .conflict_handler(ConflictHandler::Resolve);
///
/// assert_eq!(config.get_usage(), "cp SRC DST");
/// assert_eq!(config.get_prefix_chars(), "-");
/// assert!(config.is_add_help());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParserConfig {
    description: String,
    #[cfg_attr(feature = "serde", serde(alias = "usage_str"))]
    usage: String,
    #[cfg_attr(feature = "serde", serde(default))]
    prog: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    epilog: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    formatter: HelpFormatter,
    #[cfg_attr(feature = "serde", serde(default = "default_prefix_chars"))]
    prefix_chars: String,
    #[cfg_attr(feature = "serde", serde(default))]
    fromfile_prefix_chars: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    argument_default: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    conflict_handler: ConflictHandler,
    #[cfg_attr(feature = "serde", serde(default = "default_add_help"))]
    add_help: bool,
}

fn default_prefix_chars() -> String {
    String::from("-")
}

#[cfg(feature = "serde")]
fn default_add_help() -> bool {
    true
}

impl ParserConfig {
    /// Constructs a new `ParserConfig` with the given texts and the engine defaults.
    pub fn new<D: Into<String>, U: Into<String>>(description: D, usage: U) -> Self {
        ParserConfig {
            description: description.into(),
            usage: usage.into(),
            prog: None,
            epilog: None,
            formatter: HelpFormatter::default(),
            prefix_chars: default_prefix_chars(),
            fromfile_prefix_chars: None,
            argument_default: None,
            conflict_handler: ConflictHandler::default(),
            add_help: true,
        }
    }

    /// Returns the description printed by the help message.
    pub fn get_description(&self) -> &str {
        &self.description
    }

    /// Returns the usage printed by the help, usage and error messages.
    pub fn get_usage(&self) -> &str {
        &self.usage
    }

    /// Returns the program name or `None` if the engine picks it.
    pub fn get_prog(&self) -> Option<&str> {
        self.prog.as_deref()
    }

    /// Returns the text after the engine-rendered help, if any.
    pub fn get_epilog(&self) -> Option<&str> {
        self.epilog.as_deref()
    }

    /// Returns the `HelpFormatter` of the engine-rendered help.
    pub fn get_formatter(&self) -> HelpFormatter {
        self.formatter
    }

    /// Returns the characters that start an option.
    pub fn get_prefix_chars(&self) -> &str {
        &self.prefix_chars
    }

    /// Returns the characters that mark an argument file, if any.
    pub fn get_fromfile_prefix_chars(&self) -> Option<&str> {
        self.fromfile_prefix_chars.as_deref()
    }

    /// Returns the default value given to arguments without one.
    pub fn get_argument_default(&self) -> Option<&str> {
        self.argument_default.as_deref()
    }

    /// Returns the policy for conflicting option strings.
    pub fn get_conflict_handler(&self) -> ConflictHandler {
        self.conflict_handler
    }

    /// Returns `true` if a `-h/--help` flag is added.
    pub fn is_add_help(&self) -> bool {
        self.add_help
    }

    /// Sets the program name.
    pub fn prog<S: Into<String>>(mut self, prog: S) -> Self {
        self.prog = Some(prog.into());
        self
    }

    /// Sets the text after the engine-rendered help.
    pub fn epilog<S: Into<String>>(mut self, epilog: S) -> Self {
        self.epilog = Some(epilog.into());
        self
    }

    /// Sets the `HelpFormatter`.
    pub fn formatter(mut self, formatter: HelpFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Sets the characters that start an option, `"-"` by default.
    pub fn prefix_chars<S: Into<String>>(mut self, prefix_chars: S) -> Self {
        self.prefix_chars = prefix_chars.into();
        self
    }

    /// Sets the characters that mark an argument file like `@args.txt`.
    pub fn fromfile_prefix_chars<S: Into<String>>(mut self, prefix_chars: S) -> Self {
        self.fromfile_prefix_chars = Some(prefix_chars.into());
        self
    }

    /// Sets the default value of the arguments registered without one.
    pub fn argument_default<S: Into<String>>(mut self, value: S) -> Self {
        self.argument_default = Some(value.into());
        self
    }

    /// Sets the policy for conflicting option strings.
    pub fn conflict_handler(mut self, conflict_handler: ConflictHandler) -> Self {
        self.conflict_handler = conflict_handler;
        self
    }

    /// Specify if a `-h/--help` flag is added.
    pub fn add_help(mut self, add_help: bool) -> Self {
        self.add_help = add_help;
        self
    }
}

/// Layout of the help rendered by the parsing engine.
///
/// The help printed by `FormattedParser::print_help` is never affected.
///
/// The engine is built without text wrapping, so the description and the
/// argument help are always rendered as written. `RawDescription` and
/// `RawText` are accepted for configurations that name them, but render
/// the same help as `Default`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HelpFormatter {
    /// Default values are hidden.
    #[default]
    Default,
    /// Same help as `Default`.
    RawDescription,
    /// Same help as `Default`.
    RawText,
    /// Default values are shown next to each argument.
    ArgumentDefaults,
}

impl HelpFormatter {
    /// Returns `true` if the engine help shows default values.
    pub fn shows_defaults(&self) -> bool {
        matches!(self, HelpFormatter::ArgumentDefaults)
    }
}

/// Policy applied when an argument reuses an option string.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConflictHandler {
    /// Registering the argument fails.
    #[default]
    Error,
    /// The newer argument takes the option string from the older one.
    Resolve,
}
