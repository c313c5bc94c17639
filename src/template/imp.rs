use super::core::{compile, lex_parts, validate};
use super::error::TemplateError;
use super::{Part, Template};
use crate::captures::Captures;

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

impl Template {
    /// Compiles `pattern`.
    ///
    /// # Panics
    /// Panics if the pattern is malformed. See [`Template::try_new`].
    pub fn new(pattern: &str) -> Self {
        match Self::try_new(pattern) {
            Ok(t) => t,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn try_new(pattern: &str) -> Result<Self, TemplateError> {
        match compile(pattern) {
            Ok(parts) => Ok(Self { parts }),
            Err(e) => {
                log::debug!("rejected template {:?}: {}", pattern, e);
                Err(e)
            }
        }
    }

    /// Compiles a bare name as `:name`.
    pub fn variable(name: &str) -> Result<Self, TemplateError> {
        Self::try_new(&format!(":{}", name))
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Generates a path.
    ///
    /// Entries of `params` win over positional `args`. Entries that no part
    /// consumes are appended as a query string, without any encoding.
    ///
    /// ```
    /// use path_template::{captures, Template};
    ///
    /// let t = Template::new("/:root/*path.format");
    /// assert_eq!(t.apply(&["blog", "2011", "11", "4", "html"], &captures! {}), "/blog/2011/11/4.html");
    /// assert_eq!(t.apply(&["blog"], &captures! { :format => "xml", "page" => "2" }), "/blog.xml?page=2");
    /// ```
    pub fn apply<I>(&self, args: I, params: &Captures) -> String
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let args = args.into_iter().map(|a| a.to_string()).collect();
        self.generate(args, params.clone())
    }

    /// Generates a path from keyed captures only.
    pub fn render(&self, params: &Captures) -> String {
        self.generate(Default::default(), params.clone())
    }

    /// Matches `input` and extracts its captures, or returns `None`.
    ///
    /// ```
    /// use path_template::{captures, Template};
    ///
    /// let t = Template::new("/:var");
    /// let caps = t.recognize("/foo?bar=baz").unwrap();
    /// assert_eq!(caps, captures! { :var => "foo", "bar" => "baz" });
    /// ```
    pub fn recognize(&self, input: &str) -> Option<Captures> {
        let ret = self.match_input(input);
        if ret.is_none() {
            log::trace!("{:?} does not match {}", input, self);
        }
        ret
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.recognize(input).is_some()
    }

    /// Appends `pattern`, which is compiled on its own first.
    ///
    /// The result is checked as a whole, so e.g. a variable can not be
    /// appended after a glob.
    pub fn try_concat(&self, pattern: &str) -> Result<Self, TemplateError> {
        let mut rhs = lex_parts(pattern)?;
        if let Some(Part::LeadingJoiner) = rhs.first() {
            rhs.remove(0);
        }

        let mut parts = Vec::with_capacity(self.parts.len() + rhs.len());
        parts.extend_from_slice(&self.parts);
        parts.extend(rhs);

        if let Err(e) = validate(&parts) {
            log::debug!("rejected {:?} appended to {}: {}", pattern, self, e);
            return Err(e);
        }
        Ok(Self { parts })
    }

    /// # Panics
    /// Panics if the result is malformed. See [`Template::try_concat`].
    pub fn concat(&self, pattern: &str) -> Self {
        match self.try_concat(pattern) {
            Ok(t) => t,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    /// Removes the first part equal to the single part written in `pattern`,
    /// e.g. `"users"` or `":id"`.
    pub fn try_without(&self, pattern: &str) -> Result<Self, TemplateError> {
        let parts = lex_parts(pattern)?;
        match parts.iter().find(|p| **p != Part::LeadingJoiner) {
            Some(part) => Ok(self.without_part(part)),
            None => Ok(self.clone()),
        }
    }

    /// # Panics
    /// Panics if `pattern` is malformed. See [`Template::try_without`].
    pub fn without(&self, pattern: &str) -> Self {
        match self.try_without(pattern) {
            Ok(t) => t,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn without_part(&self, part: &Part) -> Self {
        let mut parts = self.parts.clone();
        if let Some(pos) = parts.iter().position(|p| p == part) {
            parts.remove(pos);
        }
        Self { parts }
    }
}

/// Compiles `pattern` and applies `args` to it in one go.
pub fn expand<I>(pattern: &str, args: I, params: &Captures) -> Result<String, TemplateError>
where
    I: IntoIterator,
    I::Item: ToString,
{
    Ok(Template::try_new(pattern)?.apply(args, params))
}

impl Add<&str> for &Template {
    type Output = Template;
    fn add(self, rhs: &str) -> Template {
        self.concat(rhs)
    }
}

impl Add<&str> for Template {
    type Output = Template;
    fn add(self, rhs: &str) -> Template {
        self.concat(rhs)
    }
}

impl Sub<&str> for &Template {
    type Output = Template;
    fn sub(self, rhs: &str) -> Template {
        self.without(rhs)
    }
}

impl Sub<&str> for Template {
    type Output = Template;
    fn sub(self, rhs: &str) -> Template {
        self.without(rhs)
    }
}

impl FromStr for Template {
    type Err = TemplateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<&str> for Template {
    type Error = TemplateError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

/// Writes the canonical pattern, e.g. `/users/:id/*rest.format`.
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in &self.parts {
            let (sigil, text) = match part {
                Part::LeadingJoiner => {
                    f.write_str("/")?;
                    continue;
                }
                Part::Format(name) => {
                    write!(f, ".{}", name)?;
                    continue;
                }
                Part::Literal(text) => ("", text),
                Part::Variable(name) => (":", name),
                Part::Glob(name) => ("*", name),
            };
            if !first {
                f.write_str("/")?;
            }
            first = false;
            write!(f, "{}{}", sigil, text)?;
        }
        Ok(())
    }
}
