use super::{Part, Template};
use crate::captures::{Captures, Key, Value};
use crate::query;

use std::collections::VecDeque;

use smallvec::SmallVec;

impl Template {
    /// Fills positional values into the captures that `params` leaves open.
    ///
    /// A format takes the last value, variables take values from the front in
    /// template order and a glob takes whatever is left.
    fn resolve(&self, mut args: VecDeque<String>, params: &mut Captures) {
        if let Some(name) = self.parts.iter().find_map(format_name) {
            if !params.contains_name(name) {
                if let Some(value) = args.pop_back() {
                    params.insert(Key::name(name), Value::One(value));
                }
            }
        }

        for part in &self.parts {
            if let Part::Variable(name) = part {
                if args.is_empty() {
                    break;
                }
                if !params.contains_name(name) {
                    if let Some(value) = args.pop_front() {
                        params.insert(Key::name(name), Value::One(value));
                    }
                }
            }
        }

        if let Some(name) = self.parts.iter().find_map(glob_name) {
            if !params.contains_name(name) {
                params.insert(Key::name(name), Value::Many(args.drain(..).collect()));
            }
        }
    }

    pub(super) fn generate(&self, args: VecDeque<String>, mut params: Captures) -> String {
        self.resolve(args, &mut params);

        let mut rooted = false;
        let mut format: Option<Value> = None;
        let mut segments: SmallVec<[String; 8]> = SmallVec::new();

        for part in &self.parts {
            match part {
                Part::LeadingJoiner => rooted = true,
                Part::Literal(text) => segments.push(text.to_string()),
                // a missing value leaves its segment out
                Part::Variable(name) => {
                    if let Some(value) = params.remove_name(name) {
                        segments.push(value.to_string());
                    }
                }
                Part::Glob(name) => match params.remove_name(name) {
                    Some(Value::Many(ref v)) if v.is_empty() => {}
                    Some(value) => segments.push(value.to_string()),
                    None => {}
                },
                Part::Format(name) => format = params.remove_name(name),
            }
        }

        let mut out = String::new();
        if rooted {
            out.push('/');
        }
        out.push_str(&segments.join("/"));
        if let Some(format) = format {
            out.push('.');
            out.push_str(&format.to_string());
        }
        if !params.is_empty() {
            out.push('?');
            out.push_str(&query::serialize(&params));
        }
        out
    }
}

fn format_name(part: &Part) -> Option<&str> {
    match part {
        Part::Format(name) => Some(name),
        _ => None,
    }
}

fn glob_name(part: &Part) -> Option<&str> {
    match part {
        Part::Glob(name) => Some(name),
        _ => None,
    }
}
