use crate::captures::{Captures, Key, Value};
use crate::query;
use crate::template::{Template, TemplateError};

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A concrete path: a template together with the values that fill it.
///
/// The string form is always produced by [`Template::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    template: Template,
    captures: Captures,
}

impl Location {
    pub fn new(template: Template, captures: Captures) -> Self {
        Self { template, captures }
    }

    pub fn recognize(template: &Template, input: &str) -> Option<Self> {
        let captures = template.recognize(input)?;
        Some(Self::new(template.clone(), captures))
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn into_captures(self) -> Captures {
        self.captures
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.captures.name(name)
    }

    pub fn query(&self, key: &str) -> Option<&Value> {
        self.captures.query(key)
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.captures.parse(name)
    }

    /// Whether the template has a variable, glob or format called `name`.
    fn declares(&self, name: &str) -> bool {
        self.template.parts().iter().any(|p| p.name() == Some(name))
    }

    fn fills_path(&self, key: &Key) -> bool {
        key.is_name() && self.declares(key.as_str())
    }

    /// The rendered path without its query string.
    pub fn path_only(&self) -> String {
        let mut captures = self.captures.clone();
        captures.retain(|(k, _)| self.fills_path(k));
        self.template.render(&captures)
    }

    /// Everything rendered after `?`, including undeclared path keys.
    pub fn query_string(&self) -> String {
        let mut captures = self.captures.clone();
        captures.retain(|(k, _)| !self.fills_path(k));
        query::serialize(&captures)
    }

    /// The captures as recognition would return them from the rendered
    /// string: undeclared path keys come back as query keys.
    fn rendered_captures(&self) -> Captures {
        let mut out = Captures::new();
        for (key, value) in self.captures.iter() {
            if self.fills_path(key) {
                out.insert(key.clone(), value.clone());
            } else {
                for v in value.as_slice() {
                    out.push(Key::query(key.as_str()), v.clone());
                }
            }
        }
        out
    }

    /// Removes a part from the template. A removed capture part also drops
    /// its value.
    pub fn try_without(&self, pattern: &str) -> Result<Self, TemplateError> {
        let template = self.template.try_without(pattern)?;
        let mut captures = self.captures.clone();
        for part in self.template.parts() {
            if let Some(name) = part.name() {
                if !template.parts().contains(part) {
                    captures.remove_name(name);
                }
            }
        }
        Ok(Self::new(template, captures))
    }

    /// # Panics
    /// Panics if `pattern` is malformed. See [`Location::try_without`].
    pub fn without(&self, pattern: &str) -> Self {
        match self.try_without(pattern) {
            Ok(l) => l,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    /// Entries of `other` override existing ones. Path keys the template
    /// does not declare are rendered into the query string.
    pub fn merge(&self, other: Captures) -> Self {
        let mut captures = self.captures.clone();
        captures.merge(other);
        Self::new(self.template.clone(), captures)
    }

    pub fn try_concat(&self, pattern: &str) -> Result<Self, TemplateError> {
        let template = self.template.try_concat(pattern)?;
        Ok(Self::new(template, self.captures.clone()))
    }

    /// Whether `input` recognizes to the same captures as this location's
    /// own rendering.
    pub fn is_match(&self, input: &str) -> bool {
        match self.template.recognize(input) {
            Some(captures) => captures == self.rendered_captures(),
            None => false,
        }
    }

    #[cfg(feature = "http-uri")]
    pub fn from_uri(template: &Template, uri: &http::Uri) -> Option<Self> {
        let captures = template.recognize_uri(uri)?;
        Some(Self::new(template.clone(), captures))
    }
}

impl Add<&str> for &Location {
    type Output = Location;
    fn add(self, rhs: &str) -> Location {
        match self.try_concat(rhs) {
            Ok(l) => l,
            Err(e) => panic!("{}: pattern = {:?}", e, rhs),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template.render(&self.captures))
    }
}
