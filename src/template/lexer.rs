use smallvec::SmallVec;

/// A raw token of a pattern or of an input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Token<'a> {
    Slash,
    Literal(&'a str),
    Variable(&'a str),
    Glob(&'a str),
    Format(&'a str),
    /// Everything after the first `?`, undecoded.
    Query(&'a str),
}

pub(super) type Tokens<'a> = SmallVec<[Token<'a>; 8]>;

const SLASH: u8 = b'/';
const COLON: u8 = b':';
const STAR: u8 = b'*';
const DOT: u8 = b'.';
const QUESTION: u8 = b'?';

#[inline]
fn is_delimiter(b: u8) -> bool {
    matches!(b, SLASH | COLON | STAR | DOT | QUESTION)
}

/// Index of the first delimiter at or after `from`.
#[inline]
fn run_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| is_delimiter(b))
        .map_or(bytes.len(), |i| from + i)
}

pub(super) fn tokenize(s: &str) -> Tokens<'_> {
    let bytes = s.as_bytes();
    let mut tokens = Tokens::new();
    let mut pos = 0;

    // delimiters are ascii, so every slice boundary below is a char boundary
    while pos < bytes.len() {
        match bytes[pos] {
            SLASH => {
                tokens.push(Token::Slash);
                pos += 1;
            }
            QUESTION => {
                tokens.push(Token::Query(&s[pos + 1..]));
                pos = bytes.len();
            }
            sigil if is_delimiter(sigil) => {
                let end = run_end(bytes, pos + 1);
                let name = &s[pos + 1..end];
                tokens.push(match sigil {
                    COLON => Token::Variable(name),
                    STAR => Token::Glob(name),
                    _ => Token::Format(name),
                });
                pos = end;
            }
            _ => {
                let end = run_end(bytes, pos);
                tokens.push(Token::Literal(&s[pos..end]));
                pos = end;
            }
        }
    }

    tokens
}
