mod core;
mod error;
mod generate;
mod imp;
mod lexer;
mod recognize;

pub use self::error::{Reason, TemplateError};
pub use self::imp::expand;

/// One structural unit of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Part {
    /// The pattern starts with `/`.
    LeadingJoiner,
    Literal(Box<str>),
    /// `:name`, exactly one segment.
    Variable(Box<str>),
    /// `*name`, zero or more trailing segments.
    Glob(Box<str>),
    /// `.name`, a dotted suffix. Always the last part.
    Format(Box<str>),
}

impl Part {
    pub fn literal(text: &str) -> Self {
        Self::Literal(text.into())
    }

    pub fn variable(name: &str) -> Self {
        Self::Variable(name.into())
    }

    pub fn glob(name: &str) -> Self {
        Self::Glob(name.into())
    }

    pub fn format(name: &str) -> Self {
        Self::Format(name.into())
    }

    /// The capture name of a variable, glob or format.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Variable(name) | Self::Glob(name) | Self::Format(name) => Some(name),
            Self::Literal(_) | Self::LeadingJoiner => None,
        }
    }
}

/// A compiled path pattern such as `/users/:id/*rest.format`.
///
/// A template is built once and then used for any number of
/// [`apply`](Template::apply) and [`recognize`](Template::recognize) calls.
/// `+`, `-` and the other algebra methods always return a new template with
/// its own part storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Template {
    parts: Vec<Part>,
}
