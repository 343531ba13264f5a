// Pattern lexer
// Splits a template into field runs and literal text

use super::RenderError;

/// Pattern letters the renderer knows how to fill in
pub(super) const SUPPORTED_LETTERS: &[char] =
    &['y', 'Q', 'M', 'd', 'E', 'h', 'H', 'm', 's', 'S', 'z', 'a'];

/// A piece of a template pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of one pattern letter starting at byte `position`,
    /// e.g. `yyyy` is `Field { letter: 'y', width: 4, position: 0 }`
    Field {
        letter: char,
        width: usize,
        position: usize,
    },
    /// Text copied to the output as is
    Literal(String),
}

/// Tokenize `pattern`.
///
/// ASCII letters form fields; text between single quotes is literal, with
/// `''` standing for one quote. Anything else is literal.
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, RenderError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c.is_ascii_alphabetic() {
            if !SUPPORTED_LETTERS.contains(&c) {
                return Err(RenderError::UnknownField {
                    letter: c,
                    position,
                });
            }
            let mut width = 1;
            while chars.next_if(|&(_, next)| next == c).is_some() {
                width += 1;
            }
            flush(&mut tokens, &mut literal);
            tokens.push(Token::Field {
                letter: c,
                width,
                position,
            });
        } else if c == '\'' {
            if chars.next_if(|&(_, next)| next == '\'').is_some() {
                literal.push('\'');
                continue;
            }
            let mut closed = false;
            while let Some((_, q)) = chars.next() {
                if q != '\'' {
                    literal.push(q);
                } else if chars.next_if(|&(_, next)| next == '\'').is_some() {
                    literal.push('\'');
                } else {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(RenderError::UnterminatedQuote { position });
            }
        } else {
            literal.push(c);
        }
    }

    flush(&mut tokens, &mut literal);
    Ok(tokens)
}

fn flush(tokens: &mut Vec<Token>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}
