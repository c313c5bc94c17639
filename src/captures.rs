use std::fmt;
use std::mem;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Key of a capture.
///
/// Path parts produce [`Key::Name`], the query string produces
/// [`Key::Query`], so the two never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(Box<str>),
    Query(String),
}

impl Key {
    pub fn name(name: &str) -> Self {
        Self::Name(name.into())
    }

    pub fn query(key: impl Into<String>) -> Self {
        Self::Query(key.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Query(key) => key,
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    #[inline]
    fn is_name_of(&self, name: &str) -> bool {
        match self {
            Self::Name(n) => &**n == name,
            Self::Query(_) => false,
        }
    }

    #[inline]
    fn is_query_of(&self, key: &str) -> bool {
        match self {
            Self::Query(k) => k == key,
            Self::Name(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    One(String),
    Many(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::One(s) => Some(s),
            Self::Many(_) => None,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        }
    }

    /// Appends `value`, turning a single value into a list.
    pub fn push(&mut self, value: String) {
        match self {
            Self::Many(v) => v.push(value),
            Self::One(first) => {
                let first = mem::take(first);
                *self = Self::Many(vec![first, value]);
            }
        }
    }
}

/// Lists are joined with `/`, the way a glob is written into a path.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(s) => f.write_str(s),
            Self::Many(v) => {
                for (i, s) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_str("/")?;
                    }
                    f.write_str(s)?;
                }
                Ok(())
            }
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::One(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::One(s.to_owned())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::One(s.clone())
    }
}

impl<S: Into<String>> From<Vec<S>> for Value {
    fn from(v: Vec<S>) -> Self {
        Self::Many(v.into_iter().map(Into::into).collect())
    }
}

macro_rules! value_from_display {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(x: $ty) -> Self {
                    Self::One(x.to_string())
                }
            }
        )+
    };
}

value_from_display!(i32, i64, u32, u64, usize);

/// An insertion-ordered mapping from [`Key`] to [`Value`].
#[derive(Debug, Clone, Default)]
pub struct Captures {
    buf: SmallVec<[(Key, Value); 8]>,
}

impl Captures {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.buf
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }

    /// Looks up a capture taken from the path.
    pub fn name(&self, name: &str) -> Option<&Value> {
        self.buf
            .iter()
            .find_map(|(k, v)| if k.is_name_of(name) { Some(v) } else { None })
    }

    /// Looks up a capture taken from the query string.
    pub fn query(&self, key: &str) -> Option<&Value> {
        self.buf
            .iter()
            .find_map(|(k, v)| if k.is_query_of(key) { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.name(name).and_then(Value::as_str).map(T::from_str)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.buf.iter().any(|(k, _)| k == key)
    }

    pub(crate) fn contains_name(&self, name: &str) -> bool {
        self.buf.iter().any(|(k, _)| k.is_name_of(name))
    }

    /// Inserts or replaces. A replaced entry keeps its position.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        match self.buf.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(mem::replace(v, value)),
            None => {
                self.buf.push((key, value));
                None
            }
        }
    }

    /// Adds a value under `key`; a repeated key collects its values into a list.
    pub fn push(&mut self, key: Key, value: String) {
        match self.buf.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => v.push(value),
            None => self.buf.push((key, Value::One(value))),
        }
    }

    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let pos = self.buf.iter().position(|(k, _)| k == key)?;
        Some(self.buf.remove(pos).1)
    }

    pub(crate) fn remove_name(&mut self, name: &str) -> Option<Value> {
        let pos = self.buf.iter().position(|(k, _)| k.is_name_of(name))?;
        Some(self.buf.remove(pos).1)
    }

    /// Entries of `other` override entries of `self`.
    pub fn merge(&mut self, other: Captures) {
        for (k, v) in other {
            self.insert(k, v);
        }
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&mut (Key, Value)) -> bool) {
        self.buf.retain(f)
    }
}

impl Deref for Captures {
    type Target = [(Key, Value)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

/// Order does not take part in equality.
impl PartialEq for Captures {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Captures {}

impl IntoIterator for Captures {
    type Item = (Key, Value);
    type IntoIter = smallvec::IntoIter<[(Key, Value); 8]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = &'a (Key, Value);
    type IntoIter = std::slice::Iter<'a, (Key, Value)>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl Extend<(Key, Value)> for Captures {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl std::iter::FromIterator<(Key, Value)> for Captures {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut captures = Self::new();
        captures.extend(iter);
        captures
    }
}

/// Builds [`Captures`]: `:ident` entries get a path key, string literal
/// entries a query key.
///
/// ```
/// use path_template::{captures, Key};
///
/// let caps = captures! { :id => "1", "page" => "2" };
/// assert_eq!(caps.name("id").unwrap().as_str(), Some("1"));
/// assert!(caps.contains_key(&Key::query("page")));
/// ```
#[macro_export]
macro_rules! captures {
    {@entry $caps:ident; } => {};
    {@entry $caps:ident; : $name:ident => $value:expr $(, $($rest:tt)*)?} => {
        $caps.insert($crate::Key::name(stringify!($name)), $crate::Value::from($value));
        $crate::captures!(@entry $caps; $($($rest)*)?);
    };
    {@entry $caps:ident; $key:literal => $value:expr $(, $($rest:tt)*)?} => {
        $caps.insert($crate::Key::query($key), $crate::Value::from($value));
        $crate::captures!(@entry $caps; $($($rest)*)?);
    };
    {} => {
        $crate::Captures::new()
    };
    {$($tt:tt)+} => {{
        let mut __caps = $crate::Captures::new();
        $crate::captures!(@entry __caps; $($tt)+);
        __caps
    }};
}
