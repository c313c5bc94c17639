//! Path templates such as `/users/:id/*rest.format`.
//!
//! A [`Template`] generates concrete paths with [`Template::apply`] and
//! extracts values from them with [`Template::recognize`].
//!
//! ```
//! use path_template::{captures, Template};
//!
//! let t = Template::new("/users/:id/*rest.format");
//! let path = t.apply(&["1", "a", "b", "json"], &captures! {});
//! assert_eq!(path, "/users/1/a/b.json");
//!
//! let caps = t.recognize(&path).unwrap();
//! assert_eq!(caps, captures! { :id => "1", :rest => vec!["a", "b"], :format => "json" });
//! ```

#![forbid(unsafe_code)]

mod captures;
mod location;
mod router;
mod template;

#[cfg(feature = "http-uri")]
mod uri;

pub mod query;

pub use self::captures::{Captures, Key, Value};
pub use self::location::Location;
pub use self::router::{Router, RouterError};
pub use self::template::{expand, Part, Reason, Template, TemplateError};
