use super::lexer::{tokenize, Token, Tokens};
use super::{Part, Template};
use crate::captures::{Captures, Key, Value};
use crate::query;

impl Template {
    /// Walks parts and input tokens in lockstep. There is no backtracking:
    /// a glob stops at the first token that is not a plain segment.
    pub(super) fn match_input(&self, input: &str) -> Option<Captures> {
        let tokens = segments(tokenize(input));
        let mut pos = 0;
        let mut captures = Captures::new();

        for part in &self.parts {
            match part {
                Part::LeadingJoiner => match tokens.get(pos) {
                    Some(Token::Slash) => pos += 1,
                    _ => return None,
                },
                Part::Literal(text) => match tokens.get(pos) {
                    Some(Token::Literal(s)) if *s == &**text => pos += 1,
                    _ => return None,
                },
                Part::Variable(name) => match tokens.get(pos) {
                    Some(Token::Literal(s)) => {
                        captures.insert(Key::name(name), Value::One((*s).to_owned()));
                        pos += 1;
                    }
                    _ => return None,
                },
                Part::Glob(name) => {
                    let mut values: Vec<String> = Vec::new();
                    while let Some(Token::Literal(s)) = tokens.get(pos) {
                        values.push((*s).to_owned());
                        pos += 1;
                    }
                    captures.insert(Key::name(name), Value::Many(values));
                }
                Part::Format(name) => match tokens.get(pos) {
                    Some(Token::Format(s)) => {
                        captures.insert(Key::name(name), Value::One((*s).to_owned()));
                        pos += 1;
                    }
                    _ => return None,
                },
            }
        }

        match tokens.get(pos..) {
            Some([]) => {}
            Some([Token::Query(q)]) => captures.extend(query::parse(q)),
            _ => return None,
        }

        Some(captures)
    }
}

/// Drops separators, keeping only a leading one.
fn segments(tokens: Tokens<'_>) -> Tokens<'_> {
    let mut out = Tokens::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i == 0 || token != Token::Slash {
            out.push(token);
        }
    }
    out
}
