use super::error::{Reason, TemplateError};
use super::lexer::{tokenize, Token};
use super::Part;

fn checked_name(name: &str) -> Result<Box<str>, TemplateError> {
    if name.is_empty() {
        return Err(TemplateError::new(Reason::EmptyName));
    }
    Ok(name.into())
}

/// Turns a pattern into parts without checking how they are arranged.
pub(super) fn lex_parts(pattern: &str) -> Result<Vec<Part>, TemplateError> {
    let tokens = tokenize(pattern);
    let mut parts: Vec<Part> = Vec::with_capacity(tokens.len());

    if let Some(Token::Slash) = tokens.first() {
        parts.push(Part::LeadingJoiner);
    }

    let mut seen_format = false;
    for &token in tokens.iter() {
        // not even a trailing slash may follow a format
        if seen_format {
            return Err(TemplateError::new(Reason::FormatNotLast));
        }
        let part = match token {
            Token::Slash => continue,
            Token::Literal(text) => Part::Literal(text.into()),
            Token::Variable(name) => Part::Variable(checked_name(name)?),
            Token::Glob(name) => Part::Glob(checked_name(name)?),
            Token::Format(name) => {
                seen_format = true;
                Part::Format(checked_name(name)?)
            }
            Token::Query(_) => return Err(TemplateError::new(Reason::QueryString)),
        };
        parts.push(part);
    }

    Ok(parts)
}

pub(super) fn validate(parts: &[Part]) -> Result<(), TemplateError> {
    let mut seen_glob = false;
    let mut seen_format = false;

    for part in parts {
        if seen_format {
            return Err(TemplateError::new(Reason::FormatNotLast));
        }
        match part {
            Part::Variable(_) if seen_glob => {
                return Err(TemplateError::new(Reason::VariableAfterGlob));
            }
            Part::Glob(_) if seen_glob => {
                return Err(TemplateError::new(Reason::MultipleGlobs));
            }
            Part::Glob(_) => seen_glob = true,
            Part::Format(_) => seen_format = true,
            _ => {}
        }
    }

    Ok(())
}

pub(super) fn compile(pattern: &str) -> Result<Vec<Part>, TemplateError> {
    let parts = lex_parts(pattern)?;
    validate(&parts)?;
    log::trace!("compiled {:?} into {:?}", pattern, parts);
    Ok(parts)
}
