use crate::cli::Args;

/// The person being greeted.
///
/// The name is fixed at construction; there is no way to change it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Args> for Person {
    fn from(args: &Args) -> Self {
        Self::new(args.name())
    }
}
