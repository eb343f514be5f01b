use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::trace;

/// Expands the arguments that name an argument file.
///
/// An argument starting with any of the `prefix_chars` is replaced with the
/// lines of the file it names, one argument per line. Those lines are
/// expanded again, so an argument file can include other files. A file that
/// includes itself, directly or through other files, is an `ArgsFile` error.
///
/// # Example
/// ```rust
/// use fmtparse::fromfile::expand_args_files;
///
/// let args = vec!["copy".to_string(), "dst".to_string()];
/// assert_eq!(expand_args_files(args.clone(), "@").unwrap(), args);
/// ```
pub fn expand_args_files<I>(args: I, prefix_chars: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut result = Vec::new();
    expand_into(args, prefix_chars, &mut Vec::new(), &mut result)?;
    Ok(result)
}

// `open` holds the files being expanded, outermost first.
fn expand_into<I>(
    args: I,
    prefix_chars: &str,
    open: &mut Vec<PathBuf>,
    result: &mut Vec<String>,
) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    for arg in args {
        let is_file = arg
            .chars()
            .next()
            .map_or(false, |c| prefix_chars.contains(c));

        if !is_file {
            result.push(arg);
            continue;
        }

        let mut chars = arg.chars();
        chars.next();
        let path = PathBuf::from(chars.as_str());

        let args_file_error = |source| Error::ArgsFile {
            path: path.clone(),
            source,
        };

        let contents = fs::read_to_string(&path).map_err(args_file_error)?;
        let canonical = fs::canonicalize(&path).map_err(args_file_error)?;

        if open.contains(&canonical) {
            return Err(args_file_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "argument file includes itself",
            )));
        }

        let lines = contents.lines().map(String::from).collect::<Vec<String>>();
        trace!(path = %path.display(), count = lines.len(), "expanding argument file");

        open.push(canonical);
        expand_into(lines, prefix_chars, open, result)?;
        open.pop();
    }

    Ok(())
}
