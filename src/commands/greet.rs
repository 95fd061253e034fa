use std::fmt::Debug;

use crate::cli::Args;
use crate::error::CommandResult;
use crate::person::Person;

pub const GREETING_PREFIX: &str = "Hello ";

/// Renders a value with its field names and values visible.
pub fn render<T: Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Returns the greeting message for the provided arguments.
pub fn message(args: &Args) -> CommandResult<String> {
    let person = Person::from(args);
    tracing::debug!(name = person.name(), "greeting person");
    Ok(format!("{GREETING_PREFIX}{}", render(&person)))
}
