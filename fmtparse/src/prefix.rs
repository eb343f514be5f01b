/// Rewrites command-line tokens that use custom prefix characters into the
/// `-` syntax understood by the parsing engine.
///
/// # Example
/// ```rust
/// use fmtparse::prefix::PrefixChars;
///
/// let prefix = PrefixChars::new("-+");
/// let args = prefix.translate(vec!["+v".to_string(), "++name=rust".to_string(), "file".to_string()]);
/// assert_eq!(args, vec!["-v", "--name=rust", "file"]);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PrefixChars {
    chars: Vec<char>,
}

impl PrefixChars {
    /// Constructs a new `PrefixChars` from each `char` of the given value.
    pub fn new(value: &str) -> Self {
        let mut chars = Vec::new();
        for c in value.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }

        PrefixChars { chars }
    }

    /// Returns `true` if there is no prefix characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if only the engine `-` prefix is used.
    pub fn is_engine_default(&self) -> bool {
        self.chars == ['-']
    }

    /// Returns `true` if the given `char` starts an option.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns the `char` used to display option strings.
    pub fn display_char(&self) -> char {
        self.chars.first().copied().unwrap_or('-')
    }

    /// Formats an engine short flag with the display prefix, as `-v` or `+v`.
    pub fn short(&self, c: char) -> String {
        format!("{}{}", self.display_char(), c)
    }

    /// Formats an engine long flag with the display prefix, as `--verbose` or `++verbose`.
    pub fn long(&self, name: &str) -> String {
        let prefix = self.display_char();
        format!("{}{}{}", prefix, prefix, name)
    }

    /// Rewrites the tokens starting with a custom prefix.
    ///
    /// Once a `--` terminator is found the rest of the tokens are kept as they are.
    pub fn translate<I>(&self, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        if self.is_engine_default() {
            return args.into_iter().collect();
        }

        let mut result = Vec::new();
        let mut terminated = false;

        for arg in args {
            if terminated {
                result.push(arg);
                continue;
            }

            if arg == "--" {
                terminated = true;
                result.push(arg);
                continue;
            }

            result.push(self.translate_one(arg));
        }

        result
    }

    fn translate_one(&self, arg: String) -> String {
        let mut chars = arg.chars();
        match chars.next() {
            Some(c) if c != '-' && self.contains(c) => {}
            _ => return arg,
        }

        // A single prefix character is a value
        let rest = chars.as_str();
        if rest.is_empty() {
            return arg;
        }

        match rest.chars().next() {
            Some(second) if self.contains(second) => {
                let name = &rest[second.len_utf8()..];
                if name.is_empty() {
                    arg
                } else {
                    format!("--{}", name)
                }
            }
            _ => format!("-{}", rest),
        }
    }
}

impl Default for PrefixChars {
    fn default() -> Self {
        PrefixChars::new("-")
    }
}
