use crate::config::{ConflictHandler, HelpFormatter, ParserConfig};
use crate::error::{engine_message, Error, Result};
use crate::fromfile::expand_args_files;
use crate::help::{format_error, format_help, print_message, write_message};
use crate::prefix::PrefixChars;
use crate::registry::{ArgumentRegistry, HELP_ID};
use clap::error::ErrorKind as EngineErrorKind;
use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, trace};

/// A command-line parser that prints caller-formatted help, usage and errors.
///
/// Arguments are registered as `clap::Arg`s and the parsing is done by `clap`,
/// only the three outputs are replaced:
/// - usage: the usage string as it is.
/// - help: `"\n" + description + "\n" + usage`.
/// - error: `"error: {message}\n\n"` followed by the usage, then exit with code `2`.
///
/// All of them are written to `stderr`.
///
/// # Example
/// ```rust
/// use fmtparse::FormattedParser;
/// use clap::Arg;
///
/// let mut parser = FormattedParser::new("Copies files.", "cp SRC DST");
/// parser.add_argument(Arg::new("src").required(true)).unwrap();
/// parser.add_argument(Arg::new("dst").required(true)).unwrap();
///
/// let matches = parser.try_parse_from(["a.txt", "b.txt"]).unwrap();
/// assert_eq!(matches.get_one::<String>("dst").unwrap(), "b.txt");
///
/// assert_eq!(parser.format_help(), "\nCopies files.\ncp SRC DST");
/// ```
#[derive(Debug, Clone)]
pub struct FormattedParser {
    config: ParserConfig,
    prefix: PrefixChars,
    args: ArgumentRegistry,
}

impl FormattedParser {
    /// Constructs a new `FormattedParser` with the given texts and the engine defaults.
    ///
    /// Both texts are required, there is no parser without a usage:
    /// ```compile_fail
    /// let parser = fmtparse::FormattedParser::new("Copies files.");
    /// ```
    pub fn new<D: Into<String>, U: Into<String>>(description: D, usage: U) -> Self {
        let config = ParserConfig::new(description, usage);
        let prefix = PrefixChars::new(config.get_prefix_chars());
        let args = new_registry(&config, &prefix);

        FormattedParser {
            config,
            prefix,
            args,
        }
    }

    /// Returns a `ParserBuilder` to set the pass-through options.
    pub fn builder<D: Into<String>, U: Into<String>>(description: D, usage: U) -> ParserBuilder {
        ParserBuilder::new(ParserConfig::new(description, usage))
    }

    /// Constructs a new `FormattedParser` from the given `ParserConfig`.
    ///
    /// # Errors
    /// If the configuration has no prefix characters.
    pub fn from_config(config: ParserConfig) -> Result<Self> {
        ParserBuilder::new(config).build()
    }

    /// Returns the `ParserConfig` of this parser.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the description used in the help message.
    pub fn get_description(&self) -> &str {
        self.config.get_description()
    }

    /// Returns the usage string.
    pub fn get_usage(&self) -> &str {
        self.config.get_usage()
    }

    /// Returns the program name, if not set is the file name of the running program.
    pub fn get_prog(&self) -> String {
        if let Some(prog) = self.config.get_prog() {
            return prog.to_string();
        }

        std::env::args_os()
            .next()
            .as_ref()
            .and_then(|arg0| Path::new(arg0).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns the registered arguments.
    pub fn arguments(&self) -> &ArgumentRegistry {
        &self.args
    }

    /// Registers the given argument.
    ///
    /// If the parser has an `argument_default` the argument gets it as default
    /// value, unless it already has one, takes no values or is required.
    ///
    /// # Errors
    /// With `ConflictHandler::Error` if the id or an option string is already used.
    pub fn add_argument(&mut self, arg: Arg) -> Result<&mut Self> {
        let arg = self.apply_argument_default(arg);
        self.args.add(arg)?;
        Ok(self)
    }

    /// Registers the given argument, consuming and returning this parser.
    pub fn arg(mut self, arg: Arg) -> Result<Self> {
        self.add_argument(arg)?;
        Ok(self)
    }

    /// Returns the engine `Command` with all the registered arguments.
    ///
    /// Everything this parser does not override can be reached from here.
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.get_prog())
            .about(self.config.get_description().to_string())
            .override_usage(self.config.get_usage().to_string())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .color(ColorChoice::Never);

        if let Some(epilog) = self.config.get_epilog() {
            command = command.after_help(epilog.to_string());
        }

        // Only arguments taking values can hide their default
        let hide_defaults = !self.config.get_formatter().shows_defaults();
        command.args(self.args.iter().map(|arg| {
            if arg.get_action().takes_values() {
                arg.clone().hide_default_value(hide_defaults)
            } else {
                arg.clone()
            }
        }))
    }

    /// Parses the given arguments, the program name must not be included.
    ///
    /// Argument files are expanded and custom prefixes rewritten before the
    /// tokens reach the engine.
    ///
    /// # Errors
    /// - `Error::HelpRequested` if the help flag is found.
    /// - `Error::ArgsFile` if an argument file cannot be read.
    /// - `Error::Usage` if the engine rejects the tokens.
    pub fn try_parse_from<I, T>(&self, args: I) -> Result<ArgMatches>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into).collect::<Vec<String>>();

        if let Some(prefix_chars) = self.config.get_fromfile_prefix_chars() {
            args = expand_args_files(args, prefix_chars)?;
        }

        let args = self.prefix.translate(args);
        trace!(count = args.len(), "parsing arguments");

        self.command()
            .try_get_matches_from(args)
            .map_err(|error| match error.kind() {
                EngineErrorKind::DisplayHelp
                | EngineErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Error::HelpRequested,
                _ => Error::Usage(engine_message(&error)),
            })
    }

    /// Parses the given arguments, the program name must not be included.
    ///
    /// On a help request prints the help and exits with code `0`, on any other
    /// error calls `FormattedParser::error`.
    pub fn parse_args_from<I, T>(&self, args: I) -> ArgMatches
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        match self.try_parse_from(args) {
            Ok(matches) => matches,
            Err(Error::HelpRequested) => {
                self.print_help();
                self.exit(0, None)
            }
            Err(error) => self.error(error),
        }
    }

    /// Parses the arguments of the running program.
    ///
    /// This is equivalent to `parser.parse_args_from(std::env::args().skip(1))`.
    #[inline]
    pub fn parse_args(&self) -> ArgMatches {
        self.parse_args_from(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Returns the usage message.
    pub fn format_usage(&self) -> &str {
        self.config.get_usage()
    }

    /// Returns the help message: `"\n" + description + "\n" + usage`.
    pub fn format_help(&self) -> String {
        format_help(self.config.get_description(), self.config.get_usage())
    }

    /// Writes the usage message to the given destination.
    pub fn write_usage<W: Write + ?Sized>(&self, destination: &mut W) -> io::Result<()> {
        write_message(self.format_usage(), destination)
    }

    /// Writes the help message to the given destination.
    pub fn write_help<W: Write + ?Sized>(&self, destination: &mut W) -> io::Result<()> {
        write_message(&self.format_help(), destination)
    }

    /// Writes the error message followed by the usage to the given destination.
    pub fn write_error<W: Write + ?Sized>(&self, destination: &mut W, message: &str) -> io::Result<()> {
        write_message(&format_error(message), destination)?;
        self.write_usage(destination)
    }

    /// Prints the usage message to `stderr`.
    pub fn print_usage(&self) {
        print_message(self.format_usage(), &mut io::stderr());
    }

    /// Prints the help message to `stderr`.
    pub fn print_help(&self) {
        print_message(&self.format_help(), &mut io::stderr());
    }

    /// Prints `"error: {message}\n\n"` and the usage to `stderr` and exits with code `2`.
    pub fn error<M: Display>(&self, message: M) -> ! {
        let message = message.to_string();
        debug!(error = %message, "exiting on usage error");

        print_message(&format_error(&message), &mut io::stderr());
        self.print_usage();
        self.exit(2, None)
    }

    /// Prints the message, if any, to `stderr` and exits with the given status code.
    pub fn exit(&self, status: i32, message: Option<&str>) -> ! {
        if let Some(message) = message {
            print_message(message, &mut io::stderr());
        }

        std::process::exit(status)
    }

    fn apply_argument_default(&self, arg: Arg) -> Arg {
        match self.config.get_argument_default() {
            Some(value)
                if arg.get_action().takes_values()
                    && arg.get_default_values().is_empty()
                    && !arg.is_required_set() =>
            {
                arg.default_value(value.to_string())
            }
            _ => arg,
        }
    }
}

/// Builder for a `FormattedParser` with pass-through options and parent parsers.
///
/// # Example
/// ```rust
/// use fmtparse::{ConflictHandler, FormattedParser};
/// use clap::{Arg, ArgAction};
///
/// let common = FormattedParser::builder("", "")
///     .add_help(false)
///     .build()
///     .unwrap()
///     .arg(Arg::new("verbose").short('v').action(ArgAction::SetTrue))
///     .unwrap();
///
/// let parser = FormattedParser::builder("Copies files.", "cp [-v] SRC DST")
///     .prog("cp")
///     .parent(&common)
///     .conflict_handler(ConflictHandler::Resolve)
///     .build()
///     .unwrap();
///
/// assert!(parser.arguments().contains("verbose"));
/// ```
#[derive(Debug, Clone)]
pub struct ParserBuilder {
    config: ParserConfig,
    parents: Vec<Arg>,
}

impl ParserBuilder {
    /// Constructs a new `ParserBuilder` from the given `ParserConfig`.
    pub fn new(config: ParserConfig) -> Self {
        ParserBuilder {
            config,
            parents: Vec::new(),
        }
    }

    /// Sets the program name.
    pub fn prog<S: Into<String>>(mut self, prog: S) -> Self {
        self.config = self.config.prog(prog);
        self
    }

    /// Sets the text after the engine-rendered help.
    pub fn epilog<S: Into<String>>(mut self, epilog: S) -> Self {
        self.config = self.config.epilog(epilog);
        self
    }

    /// Copies the arguments of the given parser, except its help flag.
    pub fn parent(mut self, parent: &FormattedParser) -> Self {
        self.parents.extend(
            parent
                .arguments()
                .iter()
                .filter(|arg| arg.get_id() != HELP_ID)
                .cloned(),
        );
        self
    }

    /// Sets the `HelpFormatter` of the engine-rendered help.
    pub fn formatter(mut self, formatter: HelpFormatter) -> Self {
        self.config = self.config.formatter(formatter);
        self
    }

    /// Sets the characters that start an option.
    pub fn prefix_chars<S: Into<String>>(mut self, prefix_chars: S) -> Self {
        self.config = self.config.prefix_chars(prefix_chars);
        self
    }

    /// Sets the characters that mark an argument file.
    pub fn fromfile_prefix_chars<S: Into<String>>(mut self, prefix_chars: S) -> Self {
        self.config = self.config.fromfile_prefix_chars(prefix_chars);
        self
    }

    /// Sets the default value of the arguments registered without one.
    pub fn argument_default<S: Into<String>>(mut self, value: S) -> Self {
        self.config = self.config.argument_default(value);
        self
    }

    /// Sets the policy for conflicting option strings.
    pub fn conflict_handler(mut self, conflict_handler: ConflictHandler) -> Self {
        self.config = self.config.conflict_handler(conflict_handler);
        self
    }

    /// Specify if a `-h/--help` flag is added.
    pub fn add_help(mut self, add_help: bool) -> Self {
        self.config = self.config.add_help(add_help);
        self
    }

    /// Constructs the `FormattedParser`.
    ///
    /// # Errors
    /// - `Error::InvalidPrefixChars` if the prefix characters are empty.
    /// - `Error::Conflict` if the parents arguments clash and the policy is `ConflictHandler::Error`.
    pub fn build(self) -> Result<FormattedParser> {
        let prefix = PrefixChars::new(self.config.get_prefix_chars());
        if prefix.is_empty() {
            return Err(Error::InvalidPrefixChars);
        }

        let mut args = new_registry(&self.config, &prefix);
        for arg in self.parents {
            args.add(arg)?;
        }

        debug!(
            prog = ?self.config.get_prog(),
            args = args.len(),
            conflict_handler = ?self.config.get_conflict_handler(),
            "parser built"
        );

        Ok(FormattedParser {
            config: self.config,
            prefix,
            args,
        })
    }
}

impl From<ParserConfig> for ParserBuilder {
    fn from(config: ParserConfig) -> Self {
        ParserBuilder::new(config)
    }
}

fn new_registry(config: &ParserConfig, prefix: &PrefixChars) -> ArgumentRegistry {
    let conflict_handler = config.get_conflict_handler();

    if config.is_add_help() {
        let help = Arg::new(HELP_ID)
            .short('h')
            .long("help")
            .action(ArgAction::Help)
            .help("show this help message and exit");

        ArgumentRegistry::with_help(conflict_handler, prefix.clone(), help)
    } else {
        ArgumentRegistry::new(conflict_handler, prefix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn cp() -> FormattedParser {
        FormattedParser::new("Copies files.", "cp SRC DST")
            .arg(Arg::new("src").required(true))
            .unwrap()
            .arg(Arg::new("dst").required(true))
            .unwrap()
    }

    #[test]
    fn help_test() {
        let parser = cp();
        assert_eq!(parser.format_help(), "\nCopies files.\ncp SRC DST");

        let mut buf = Vec::new();
        parser.write_help(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\nCopies files.\ncp SRC DST");
    }

    #[test]
    fn usage_test() {
        let parser = FormattedParser::new("Lists.", "usage: ls [-l]\n\n  -l  long listing\n");

        let mut buf = Vec::new();
        parser.write_usage(&mut buf).unwrap();
        assert_eq!(buf, b"usage: ls [-l]\n\n  -l  long listing\n");
        assert_eq!(parser.format_usage(), parser.get_usage());
    }

    #[test]
    fn write_error_test() {
        let parser = cp();

        let mut buf = Vec::new();
        parser.write_error(&mut buf, "missing argument DST").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "error: missing argument DST\n\ncp SRC DST"
        );
    }

    #[test]
    fn parse_test() {
        let matches = cp().try_parse_from(["a.txt", "b.txt"]).unwrap();

        assert_eq!(matches.get_one::<String>("src").unwrap(), "a.txt");
        assert_eq!(matches.get_one::<String>("dst").unwrap(), "b.txt");
    }

    #[test]
    fn parse_missing_argument_test() {
        let error = cp().try_parse_from(["a.txt"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Usage);
        assert!(error.to_string().contains("<dst>"));
        assert!(!error.to_string().starts_with("error:"));
    }

    #[test]
    fn parse_unknown_option_test() {
        let error = cp().try_parse_from(["--force", "a.txt", "b.txt"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Usage);
        assert!(error.to_string().contains("--force"));
    }

    #[test]
    fn help_flag_test() {
        let error = cp().try_parse_from(["-h"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::HelpRequested);

        let error = cp().try_parse_from(["a.txt", "--help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::HelpRequested);
    }

    #[test]
    fn no_help_flag_test() {
        let parser = FormattedParser::builder("Copies files.", "cp SRC DST")
            .add_help(false)
            .build()
            .unwrap();

        assert!(parser.arguments().is_empty());
        assert_eq!(parser.try_parse_from(["-h"]).unwrap_err().kind(), ErrorKind::Usage);
    }

    #[test]
    fn help_conflict_test() {
        let mut parser = FormattedParser::new("Connects.", "connect -h HOST");
        let error = parser
            .add_argument(Arg::new("host").short('h'))
            .unwrap_err();

        assert_eq!(error.to_string(), "argument -h: conflicting option string: -h");
    }

    #[test]
    fn resolve_help_conflict_test() {
        let parser = FormattedParser::builder("Connects.", "connect -h HOST")
            .conflict_handler(ConflictHandler::Resolve)
            .build()
            .unwrap()
            .arg(Arg::new("host").short('h'))
            .unwrap();

        let matches = parser.try_parse_from(["-h", "localhost"]).unwrap();
        assert_eq!(matches.get_one::<String>("host").unwrap(), "localhost");

        // `--help` survives
        let error = parser.try_parse_from(["--help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::HelpRequested);
    }

    #[test]
    fn prefix_chars_test() {
        let parser = FormattedParser::builder("Prints.", "print [+v] [++name NAME]")
            .prefix_chars("+")
            .build()
            .unwrap()
            .arg(Arg::new("verbose").short('v').action(ArgAction::SetTrue))
            .unwrap()
            .arg(Arg::new("name").long("name"))
            .unwrap();

        let matches = parser.try_parse_from(["+v", "++name", "rust"]).unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(matches.get_one::<String>("name").unwrap(), "rust");

        let error = parser.try_parse_from(["++help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::HelpRequested);
    }

    #[test]
    fn prefix_chars_terminator_test() {
        let parser = FormattedParser::builder("Prints.", "print [+v] [VALUE...]")
            .prefix_chars("+")
            .build()
            .unwrap()
            .arg(Arg::new("verbose").short('v').action(ArgAction::SetTrue))
            .unwrap()
            .arg(Arg::new("values").num_args(0..))
            .unwrap();

        let matches = parser.try_parse_from(["+v", "--", "+b"]).unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(
            matches
                .get_many::<String>("values")
                .unwrap()
                .map(String::as_str)
                .collect::<Vec<&str>>(),
            vec!["+b"]
        );
    }

    #[test]
    fn empty_prefix_chars_test() {
        let error = FormattedParser::builder("Prints.", "print")
            .prefix_chars("")
            .build()
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidPrefixChars);
    }

    #[test]
    fn fromfile_test() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a.txt").unwrap();
        writeln!(file, "b.txt").unwrap();

        let parser = FormattedParser::builder("Copies files.", "cp SRC DST")
            .fromfile_prefix_chars("@")
            .build()
            .unwrap()
            .arg(Arg::new("src").required(true))
            .unwrap()
            .arg(Arg::new("dst").required(true))
            .unwrap();

        let matches = parser
            .try_parse_from([format!("@{}", file.path().display())])
            .unwrap();

        assert_eq!(matches.get_one::<String>("src").unwrap(), "a.txt");
        assert_eq!(matches.get_one::<String>("dst").unwrap(), "b.txt");
    }

    #[test]
    fn fromfile_missing_test() {
        let parser = FormattedParser::builder("Copies files.", "cp SRC DST")
            .fromfile_prefix_chars("@")
            .build()
            .unwrap();

        let error = parser.try_parse_from(["@/no/such/file/args.txt"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgsFile);
        assert!(error.is_usage_error());
    }

    #[test]
    fn argument_default_test() {
        let parser = FormattedParser::builder("Greets.", "greet [--name NAME] [--times N]")
            .argument_default("nobody")
            .build()
            .unwrap()
            .arg(Arg::new("name").long("name"))
            .unwrap()
            .arg(Arg::new("times").long("times").default_value("1"))
            .unwrap()
            .arg(Arg::new("loud").long("loud").action(ArgAction::SetTrue))
            .unwrap();

        let matches = parser.try_parse_from(Vec::<String>::new()).unwrap();
        assert_eq!(matches.get_one::<String>("name").unwrap(), "nobody");
        assert_eq!(matches.get_one::<String>("times").unwrap(), "1");
        assert!(!matches.get_flag("loud"));
    }

    #[test]
    fn parents_test() {
        let common = FormattedParser::builder("", "")
            .build()
            .unwrap()
            .arg(Arg::new("verbose").short('v').action(ArgAction::SetTrue))
            .unwrap();

        let parser = FormattedParser::builder("Copies files.", "cp [-v] SRC")
            .parent(&common)
            .build()
            .unwrap()
            .arg(Arg::new("src").required(true))
            .unwrap();

        let ids = parser
            .arguments()
            .iter()
            .map(|a| a.get_id().as_str())
            .collect::<Vec<&str>>();
        assert_eq!(ids, vec!["help", "verbose", "src"]);

        let matches = parser.try_parse_from(["-v", "a.txt"]).unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn parents_conflict_test() {
        let first = FormattedParser::builder("", "")
            .add_help(false)
            .build()
            .unwrap()
            .arg(Arg::new("verbose").short('v').action(ArgAction::SetTrue))
            .unwrap();

        let second = FormattedParser::builder("", "")
            .add_help(false)
            .build()
            .unwrap()
            .arg(Arg::new("version").short('v').action(ArgAction::SetTrue))
            .unwrap();

        let error = FormattedParser::builder("Prints.", "print")
            .parent(&first)
            .parent(&second)
            .build()
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);

        let parser = FormattedParser::builder("Prints.", "print")
            .parent(&first)
            .parent(&second)
            .conflict_handler(ConflictHandler::Resolve)
            .build()
            .unwrap();
        assert!(!parser.arguments().contains("verbose"));
        assert!(parser.arguments().contains("version"));
    }

    #[test]
    fn command_test() {
        let parser = FormattedParser::builder("Copies files.", "cp SRC DST")
            .prog("cp")
            .epilog("Report bugs to nobody.")
            .build()
            .unwrap()
            .arg(Arg::new("mode").long("mode").default_value("644"))
            .unwrap();

        let command = parser.command();
        assert_eq!(command.get_name(), "cp");
        assert_eq!(
            command.get_after_help().map(|s| s.to_string()),
            Some("Report bugs to nobody.".to_string())
        );

        let mode = command.get_arguments().find(|a| a.get_id() == "mode").unwrap();
        assert!(mode.is_hide_default_value_set());

        let parser = FormattedParser::builder("Copies files.", "cp SRC DST")
            .formatter(HelpFormatter::ArgumentDefaults)
            .build()
            .unwrap()
            .arg(Arg::new("mode").long("mode").default_value("644"))
            .unwrap();

        let command = parser.command();
        let mode = command.get_arguments().find(|a| a.get_id() == "mode").unwrap();
        assert!(!mode.is_hide_default_value_set());
    }

    #[test]
    fn command_render_help_test() {
        for formatter in [HelpFormatter::Default, HelpFormatter::ArgumentDefaults] {
            let parser = FormattedParser::builder("Copies files.", "cp SRC DST")
                .prog("cp")
                .formatter(formatter)
                .build()
                .unwrap()
                .arg(Arg::new("force").short('f').action(ArgAction::SetTrue))
                .unwrap()
                .arg(Arg::new("mode").long("mode").default_value("644"))
                .unwrap();

            let command = parser.command();
            let force = command.get_arguments().find(|a| a.get_id() == "force").unwrap();
            assert!(!force.is_hide_default_value_set());

            let help = parser.command().render_help().to_string();
            assert!(help.contains("Copies files."));
            assert!(help.contains("cp SRC DST"));
            assert_eq!(help.contains("[default: 644]"), formatter.shows_defaults());
        }
    }

    #[test]
    fn raw_formatter_test() {
        let render = |formatter| {
            FormattedParser::builder("Copies\n  files.", "cp SRC DST")
                .prog("cp")
                .formatter(formatter)
                .build()
                .unwrap()
                .arg(Arg::new("mode").long("mode").help("File\n  mode.").default_value("644"))
                .unwrap()
                .command()
                .render_help()
                .to_string()
        };

        let default = render(HelpFormatter::Default);
        assert!(default.contains("Copies\n  files."));
        assert_eq!(render(HelpFormatter::RawDescription), default);
        assert_eq!(render(HelpFormatter::RawText), default);
    }

    #[test]
    fn from_config_test() {
        let config = ParserConfig::new("Copies files.", "cp SRC DST").prog("cp");
        let parser = FormattedParser::from_config(config.clone()).unwrap();

        assert_eq!(parser.config(), &config);
        assert_eq!(parser.get_prog(), "cp");
        assert_eq!(parser.get_description(), "Copies files.");
        assert!(parser.arguments().contains(HELP_ID));
    }
}
