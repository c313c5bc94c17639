use crate::captures::Captures;
use crate::template::{Part, Template, TemplateError};

use std::mem;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("pattern collision occurred")]
    Collision,
}

/// A first-match table of templates.
///
/// Templates are tried in insertion order and the first one that recognizes
/// the input wins.
#[derive(Debug)]
pub struct Router<T> {
    routes: Vec<(Template, T)>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.try_insert(pattern, data) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, RouterError> {
        let template = Template::try_new(pattern)?;
        self.try_insert_template(template, data)
    }

    pub fn try_insert_template(
        &mut self,
        template: Template,
        data: T,
    ) -> Result<&mut Self, RouterError> {
        if self.routes.iter().any(|(t, _)| same_shape(t, &template)) {
            log::debug!("template {} is already routed", template);
            return Err(RouterError::Collision);
        }
        self.routes.push((template, data));
        Ok(self)
    }

    pub fn find(&self, input: &str) -> Option<(&T, Captures)> {
        self.routes
            .iter()
            .find_map(|(t, data)| t.recognize(input).map(|caps| (data, caps)))
    }

    pub fn find_mut(&mut self, input: &str) -> Option<(&mut T, Captures)> {
        self.routes
            .iter_mut()
            .find_map(|(t, data)| t.recognize(input).map(move |caps| (data, caps)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Template, &T)> + '_ {
        self.routes.iter().map(|(t, data)| (t, data))
    }

    #[cfg(feature = "http-uri")]
    pub fn find_uri(&self, uri: &http::Uri) -> Option<(&T, Captures)> {
        self.find(crate::uri::target(uri))
    }
}

/// Whether two templates match exactly the same inputs, capture names aside.
fn same_shape(lhs: &Template, rhs: &Template) -> bool {
    let (lhs, rhs) = (lhs.parts(), rhs.parts());
    lhs.len() == rhs.len()
        && lhs.iter().zip(rhs).all(|(a, b)| match (a, b) {
            (Part::Literal(a), Part::Literal(b)) => a == b,
            _ => mem::discriminant(a) == mem::discriminant(b),
        })
}
