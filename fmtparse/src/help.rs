use std::io::{self, Write};

/// Writes the given message to the destination.
///
/// Nothing is written for an empty message.
pub fn write_message<W: Write + ?Sized>(message: &str, destination: &mut W) -> io::Result<()> {
    if message.is_empty() {
        return Ok(());
    }

    destination.write_all(message.as_bytes())?;
    destination.flush()
}

/// Writes the given message to the destination, ignoring any write failure.
///
/// A closed `stderr` must not turn a usage message into a panic.
pub fn print_message<W: Write + ?Sized>(message: &str, destination: &mut W) {
    let _ = write_message(message, destination);
}

/// Returns the help message: a newline, the description, a newline and the usage.
///
/// # Example
/// ```rust
/// use fmtparse::help::format_help;
///
/// assert_eq!(format_help("Copies files.", "cp SRC DST"), "\nCopies files.\ncp SRC DST");
/// ```
pub fn format_help(description: &str, usage: &str) -> String {
    let mut buf = String::with_capacity(description.len() + usage.len() + 2);
    buf.push('\n');
    buf.push_str(description);
    buf.push('\n');
    buf.push_str(usage);
    buf
}

/// Returns the line written before the usage on a fatal error.
///
/// # Example
/// ```rust
/// use fmtparse::help::format_error;
///
/// assert_eq!(format_error("missing argument DST"), "error: missing argument DST\n\n");
/// ```
pub fn format_error(message: &str) -> String {
    format!("error: {}\n\n", message)
}
