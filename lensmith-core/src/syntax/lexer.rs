//! Tokenizer for Swift-like declaration text.
//!
//! Only the structure needed to find members is tokenized: identifiers,
//! punctuation and opaque literals. Comments and whitespace are dropped, but
//! every token remembers whether a line break preceded it, since statements
//! in a type body are separated by newlines.

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Identifier or keyword, with surrounding backticks removed.
    Identifier(String),
    Number,
    StringLiteral,
    /// `->`
    Arrow,
    Punct(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) newline_before: bool,
}

impl Token {
    pub(crate) fn identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub(crate) fn is_punct(&self, expected: char) -> bool {
        self.kind == TokenKind::Punct(expected)
    }
}

const fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'$' || byte >= 0x80
}

const fn is_identifier_continue(byte: u8) -> bool {
    is_identifier_start(byte) || byte.is_ascii_digit()
}

/// Non-ASCII characters that separate tokens, including a byte-order mark.
fn is_unicode_blank(character: char) -> bool {
    character.is_whitespace() || character == '\u{FEFF}'
}

fn is_identifier_char(character: char) -> bool {
    u8::try_from(character).map_or_else(|_| !is_unicode_blank(character), is_identifier_continue)
}

/// Offset just past the identifier that starts at `start`.
fn identifier_end(source: &str, start: usize) -> usize {
    source[start..]
        .char_indices()
        .find(|&(_, character)| !is_identifier_char(character))
        .map_or(source.len(), |(offset, _)| start + offset)
}

fn has_hashes(bytes: &[u8], at: usize, count: usize) -> bool {
    (0..count).all(|offset| bytes.get(at + offset) == Some(&b'#'))
}

/// Splits `source` into tokens.
///
/// On a lexical error the tokens read before it are returned along with
/// the error.
pub(crate) fn tokenize(source: &str) -> (Vec<Token>, Option<ParseError>) {
    let mut tokens = Vec::new();
    let error = scan_tokens(source, &mut tokens).err();
    (tokens, error)
}

fn scan_tokens(source: &str, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
    let bytes = source.as_bytes();
    let mut position = 0;
    let mut newline_before = true;

    while let Some(&byte) = bytes.get(position) {
        let start = position;
        if !byte.is_ascii()
            && let Some(blank) = source[position..]
                .chars()
                .next()
                .filter(|&character| is_unicode_blank(character))
        {
            if matches!(blank, '\u{85}' | '\u{2028}' | '\u{2029}') {
                newline_before = true;
            }
            position += blank.len_utf8();
            continue;
        }
        let kind = match byte {
            b'\n' => {
                newline_before = true;
                position += 1;
                continue;
            }
            b' ' | b'\t' | b'\r' => {
                position += 1;
                continue;
            }
            b'/' if bytes.get(position + 1) == Some(&b'/') => {
                while bytes.get(position).is_some_and(|&byte| byte != b'\n') {
                    position += 1;
                }
                continue;
            }
            b'/' if bytes.get(position + 1) == Some(&b'*') => {
                position = skip_block_comment(bytes, position)?;
                if bytes[start..position].contains(&b'\n') {
                    newline_before = true;
                }
                continue;
            }
            b'"' => {
                position = skip_string(bytes, position, 0)?;
                TokenKind::StringLiteral
            }
            b'#' => {
                let mut hashes = 0;
                while bytes.get(position + hashes) == Some(&b'#') {
                    hashes += 1;
                }
                if bytes.get(position + hashes) == Some(&b'"') {
                    position = skip_string(bytes, position + hashes, hashes)?;
                    TokenKind::StringLiteral
                } else {
                    position += 1;
                    TokenKind::Punct('#')
                }
            }
            b'`' => {
                let name_start = position + 1;
                let Some(length) = bytes[name_start..].iter().position(|&byte| byte == b'`')
                else {
                    return Err(ParseError::UnexpectedEnd {
                        context: "an escaped identifier",
                    });
                };
                position = name_start + length + 1;
                TokenKind::Identifier(source[name_start..name_start + length].to_string())
            }
            byte if is_identifier_start(byte) => {
                position = identifier_end(source, position);
                TokenKind::Identifier(source[start..position].to_string())
            }
            byte if byte.is_ascii_digit() => {
                while let Some(&byte) = bytes.get(position) {
                    let continues_fraction = byte == b'.'
                        && bytes
                            .get(position + 1)
                            .is_some_and(u8::is_ascii_digit);
                    if byte.is_ascii_alphanumeric() || byte == b'_' || continues_fraction {
                        position += 1;
                    } else {
                        break;
                    }
                }
                TokenKind::Number
            }
            b'-' if bytes.get(position + 1) == Some(&b'>') => {
                position += 2;
                TokenKind::Arrow
            }
            other => {
                position += 1;
                TokenKind::Punct(char::from(other))
            }
        };

        tokens.push(Token {
            kind,
            start,
            end: position,
            newline_before,
        });
        newline_before = false;
    }

    Ok(())
}

/// Skips a (possibly nested) block comment starting at `start`.
fn skip_block_comment(bytes: &[u8], start: usize) -> Result<usize, ParseError> {
    let mut depth = 0usize;
    let mut position = start;
    while position < bytes.len() {
        if bytes[position..].starts_with(b"/*") {
            depth += 1;
            position += 2;
        } else if bytes[position..].starts_with(b"*/") {
            depth -= 1;
            position += 2;
            if depth == 0 {
                return Ok(position);
            }
        } else {
            position += 1;
        }
    }
    Err(ParseError::UnterminatedComment { offset: start })
}

/// Skips a string literal whose opening quote is at `quote`, delimited by
/// `hashes` pound signs on each side. Returns the offset after the literal.
fn skip_string(bytes: &[u8], quote: usize, hashes: usize) -> Result<usize, ParseError> {
    let start = quote - hashes;
    let multiline = bytes[quote..].starts_with(b"\"\"\"");
    let delimiter = if multiline { 3 } else { 1 };
    let mut position = quote + delimiter;

    loop {
        let Some(&byte) = bytes.get(position) else {
            return Err(ParseError::UnterminatedString { offset: start });
        };
        match byte {
            b'\\' if has_hashes(bytes, position + 1, hashes) => {
                let escaped = position + 1 + hashes;
                position = if bytes.get(escaped) == Some(&b'(') {
                    skip_interpolation(bytes, escaped, start)?
                } else {
                    escaped + 1
                };
            }
            b'\n' if !multiline => {
                return Err(ParseError::UnterminatedString { offset: start });
            }
            b'"' => {
                let closes = !multiline || bytes[position..].starts_with(b"\"\"\"");
                if closes && has_hashes(bytes, position + delimiter, hashes) {
                    return Ok(position + delimiter + hashes);
                }
                position += 1;
            }
            _ => position += 1,
        }
    }
}

/// Skips a `\( ... )` interpolation whose `(` is at `open`.
fn skip_interpolation(bytes: &[u8], open: usize, string_start: usize) -> Result<usize, ParseError> {
    let mut depth = 1usize;
    let mut position = open + 1;
    while let Some(&byte) = bytes.get(position) {
        match byte {
            b'(' => {
                depth += 1;
                position += 1;
            }
            b')' => {
                depth -= 1;
                position += 1;
                if depth == 0 {
                    return Ok(position);
                }
            }
            b'"' => position = skip_string(bytes, position, 0)?,
            _ => position += 1,
        }
    }
    Err(ParseError::UnterminatedString {
        offset: string_start,
    })
}
