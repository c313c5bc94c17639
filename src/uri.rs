use crate::captures::Captures;
use crate::template::Template;

use http::Uri;

/// The path and query of `uri`, which is what templates are matched against.
pub(crate) fn target(uri: &Uri) -> &str {
    match uri.path_and_query() {
        Some(pq) => pq.as_str(),
        None => uri.path(),
    }
}

impl Template {
    pub fn recognize_uri(&self, uri: &Uri) -> Option<Captures> {
        self.recognize(target(uri))
    }
}
