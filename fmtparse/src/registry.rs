use crate::config::ConflictHandler;
use crate::error::{Error, Result};
use crate::prefix::PrefixChars;
use clap::Arg;
use std::fmt::{Debug, Formatter};
use tracing::debug;

/// Id of the help flag added by the parser.
pub const HELP_ID: &str = "help";

/// A name used to reference an option in the command-line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OptionString {
    /// A single `char` flag as `-v`.
    Short(char),
    /// A flag as `--verbose`.
    Long(String),
}

impl OptionString {
    /// Formats this option string with the display prefix.
    pub fn display(&self, prefix: &PrefixChars) -> String {
        match self {
            OptionString::Short(c) => prefix.short(*c),
            OptionString::Long(s) => prefix.long(s),
        }
    }
}

/// Returns the option strings of the given `Arg`, each one with `true` if it is an alias.
///
/// Positional arguments have none.
pub fn option_strings(arg: &Arg) -> Vec<(OptionString, bool)> {
    let mut result = Vec::new();

    if let Some(c) = arg.get_short() {
        result.push((OptionString::Short(c), false));
    }

    if let Some(s) = arg.get_long() {
        result.push((OptionString::Long(s.to_string()), false));
    }

    for c in arg.get_all_short_aliases().unwrap_or_default() {
        result.push((OptionString::Short(c), true));
    }

    for s in arg.get_all_aliases().unwrap_or_default() {
        result.push((OptionString::Long(s.to_string()), true));
    }

    result
}

/// Represents a collection of `Arg`s registered in a parser, in registration order.
///
/// Two arguments cannot share an id or an option string, how a clash is solved
/// depends on the `ConflictHandler`.
#[derive(Clone)]
pub struct ArgumentRegistry {
    args: Vec<Arg>,
    conflict_handler: ConflictHandler,
    prefix: PrefixChars,
}

impl ArgumentRegistry {
    /// Constructs a new empty `ArgumentRegistry`.
    pub fn new(conflict_handler: ConflictHandler, prefix: PrefixChars) -> Self {
        ArgumentRegistry {
            args: Vec::new(),
            conflict_handler,
            prefix,
        }
    }

    /// Constructs a new `ArgumentRegistry` starting with the given help flag.
    pub fn with_help(conflict_handler: ConflictHandler, prefix: PrefixChars, help: Arg) -> Self {
        ArgumentRegistry {
            args: vec![help],
            conflict_handler,
            prefix,
        }
    }

    /// Returns the policy for conflicting arguments.
    pub fn conflict_handler(&self) -> ConflictHandler {
        self.conflict_handler
    }

    /// Adds the given `Arg`.
    ///
    /// # Errors
    /// With `ConflictHandler::Error`, fails if the id or any option string is already
    /// used. With `ConflictHandler::Resolve` this never fails.
    pub fn add(&mut self, arg: Arg) -> Result<()> {
        match self.conflict_handler {
            ConflictHandler::Error => self.check_conflicts(&arg)?,
            ConflictHandler::Resolve => self.resolve_conflicts(&arg),
        }

        self.args.push(arg);
        Ok(())
    }

    /// Returns the `Arg` with the given id or `None` if not found.
    pub fn get(&self, id: &str) -> Option<&Arg> {
        self.args.iter().find(|a| a.get_id() == id)
    }

    /// Returns `true` if there is an `Arg` with the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns `true` if any `Arg` uses the given option string.
    pub fn contains_option(&self, option: &OptionString) -> bool {
        self.args
            .iter()
            .any(|a| option_strings(a).iter().any(|(s, _)| s == option))
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns `true` if there is no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Returns an `ExactSizeIterator` over the arguments.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'_ Arg> {
        self.args.iter()
    }

    /// Returns how the given argument is named in error messages: its option
    /// strings as `-v/--verbose`, or its id if positional.
    pub fn describe(&self, arg: &Arg) -> String {
        let names = option_strings(arg)
            .into_iter()
            .filter(|(_, alias)| !alias)
            .map(|(s, _)| s.display(&self.prefix))
            .collect::<Vec<String>>();

        if names.is_empty() {
            arg.get_id().to_string()
        } else {
            names.join("/")
        }
    }

    fn check_conflicts(&self, arg: &Arg) -> Result<()> {
        if self.contains(arg.get_id().as_str()) {
            return Err(Error::DuplicateId(self.describe(arg)));
        }

        let conflicts = option_strings(arg)
            .into_iter()
            .filter(|(option, _)| self.contains_option(option))
            .map(|(option, _)| option.display(&self.prefix))
            .collect::<Vec<String>>();

        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(Error::Conflict {
                argument: self.describe(arg),
                options: conflicts,
            })
        }
    }

    fn resolve_conflicts(&mut self, arg: &Arg) {
        let new_options = option_strings(arg)
            .into_iter()
            .map(|(s, _)| s)
            .collect::<Vec<OptionString>>();

        let mut kept = Vec::with_capacity(self.args.len() + 1);

        for existing in self.args.drain(..) {
            if existing.get_id() == arg.get_id() {
                debug!(id = %arg.get_id(), "replacing argument with the same id");
                continue;
            }

            let conflicts = option_strings(&existing)
                .into_iter()
                .filter(|(s, _)| new_options.contains(s))
                .collect::<Vec<(OptionString, bool)>>();

            if conflicts.is_empty() {
                kept.push(existing);
                continue;
            }

            if conflicts.iter().any(|(_, alias)| *alias) {
                debug!(id = %existing.get_id(), "removing argument with a conflicting alias");
                continue;
            }

            let mut existing = existing;
            for (option, _) in conflicts {
                debug!(
                    id = %existing.get_id(),
                    option = %option.display(&self.prefix),
                    "removing conflicting option string"
                );

                existing = match option {
                    OptionString::Short(_) => existing.short(None::<char>),
                    OptionString::Long(_) => existing.long(None::<&'static str>),
                };
            }

            if existing.get_short().is_some() || existing.get_long().is_some() {
                kept.push(existing);
            }
        }

        self.args = kept;
    }
}

impl Debug for ArgumentRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentRegistry")
            .field(
                "args",
                &self.args.iter().map(|a| a.get_id().as_str()).collect::<Vec<&str>>(),
            )
            .field("conflict_handler", &self.conflict_handler)
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl<'a> IntoIterator for &'a ArgumentRegistry {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}
