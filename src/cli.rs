use std::borrow::Cow;
use std::ffi::OsString;

use clap::{error::ErrorKind, Parser};

/// Exit status used when the command line cannot be parsed or help is requested.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Command-line arguments for the greeter.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "greeter",
    version,
    about = "Greets the person named on the command line.",
    long_about = None
)]
pub struct Args {
    /// Name of the person to greet. Anything after the first name is ignored.
    ///
    /// Flags are only recognized before the first positional argument.
    #[arg(
        value_name = "NAME",
        value_parser = clap::value_parser!(OsString),
        trailing_var_arg = true
    )]
    pub positionals: Vec<OsString>,
}

impl Args {
    /// The first positional argument, or an empty string when none was given.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn name(&self) -> Cow<'_, str> {
        self.positionals
            .first()
            .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
    }
}

/// Parses an explicit argument list. The first item is the program name.
pub fn try_parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}

/// Parses the process arguments, terminating the process if they are malformed.
pub fn parse() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => exit_on_parse_error(err),
    }
}

/// Reports a parse failure and exits.
///
/// Help goes to standard error with a non-zero status so that asking for usage
/// never looks like a successful greeting. Version output keeps clap's
/// behaviour. Everything else is clap's own error message and exit code.
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            eprint!("{}", err.render());
            std::process::exit(USAGE_EXIT_CODE)
        }
        _ => err.exit(),
    }
}
