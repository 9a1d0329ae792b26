//! Dotenv file syntax.
//!
//! Responsibilities:
//! - Split a dotenv file into bindings whose values are templates of
//!   literal text and `$NAME` references.
//!
//! Does NOT handle:
//! - Resolving references (see `applier.rs`). A template keeps each
//!   reference's source text so it can be written back verbatim.
//!
//! Supported syntax:
//! - `KEY=value` with an optional `export ` prefix. Keys start with a letter
//!   or `_` and continue with letters, digits, `_` or `.`.
//! - `#` starts a comment on its own line, after a quoted value, or after
//!   whitespace in an unquoted value.
//! - Single-quoted values are literal and may span lines.
//! - Double-quoted values may span lines and accept `\n`, `\r`, `\t`, `\"`,
//!   `\\` and `\$`.
//! - `$NAME` and `${NAME}` are references in unquoted and double-quoted
//!   values; `\$` is a literal dollar sign.
//!
//! Invariants:
//! - Syntax errors carry the line the binding starts on, never file content.

use std::iter::Peekable;
use std::str::Chars;

/// A piece of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    /// `raw` is the reference as written, e.g. `${HOST}`.
    Reference { name: String, raw: String },
}

/// One `KEY=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Binding {
    pub key: String,
    pub value: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SyntaxError {
    /// 1-based.
    pub line: usize,
}

/// Parse a whole file. Nothing is returned unless every line is valid.
pub(crate) fn parse(content: &str) -> Result<Vec<Binding>, SyntaxError> {
    let mut cursor = Cursor::new(content);
    let mut bindings = Vec::new();

    loop {
        while cursor.peek().is_some_and(char::is_whitespace) {
            cursor.bump();
        }
        match cursor.peek() {
            None => break,
            Some('#') => cursor.skip_line(),
            Some(_) => bindings.push(parse_binding(&mut cursor)?),
        }
    }

    Ok(bindings)
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Cursor {
    fn new(content: &str) -> Self {
        Self {
            chars: content.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }
}

fn parse_binding(cursor: &mut Cursor) -> Result<Binding, SyntaxError> {
    let error = SyntaxError { line: cursor.line };

    let mut key = read_key(cursor).ok_or(error)?;
    if key == "export" && matches!(cursor.peek(), Some(' ' | '\t')) {
        cursor.skip_blanks();
        key = read_key(cursor).ok_or(error)?;
    }

    cursor.skip_blanks();
    if cursor.peek() != Some('=') {
        return Err(error);
    }
    cursor.bump();
    cursor.skip_blanks();

    let value = match cursor.peek() {
        Some('\'') => {
            cursor.bump();
            let text = read_until_quote(cursor, '\'', false).ok_or(error)?;
            end_of_line(cursor).ok_or(error)?;
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Segment::Literal(text)]
            }
        }
        Some('"') => {
            cursor.bump();
            let raw = read_until_quote(cursor, '"', true).ok_or(error)?;
            end_of_line(cursor).ok_or(error)?;
            template(&raw, true).ok_or(error)?
        }
        _ => {
            let raw = read_unquoted(cursor);
            template(&raw, false).ok_or(error)?
        }
    };

    Ok(Binding { key, value })
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn read_key(cursor: &mut Cursor) -> Option<String> {
    let first = cursor.peek().filter(|c| c.is_ascii_alphabetic() || *c == '_')?;
    let mut key = String::from(first);
    cursor.bump();
    while let Some(c) = cursor.peek().filter(|c| is_name_char(*c) || *c == '.') {
        key.push(c);
        cursor.bump();
    }
    Some(key)
}

/// Raw text up to the closing quote, which is consumed. With `escapes`, a
/// backslash keeps the next character in the raw text.
fn read_until_quote(cursor: &mut Cursor, quote: char, escapes: bool) -> Option<String> {
    let mut raw = String::new();
    loop {
        match cursor.bump()? {
            c if c == quote => return Some(raw),
            '\\' if escapes => {
                raw.push('\\');
                raw.push(cursor.bump()?);
            }
            c => raw.push(c),
        }
    }
}

/// Rest of the line, without a trailing comment or trailing whitespace.
fn read_unquoted(cursor: &mut Cursor) -> String {
    let mut raw = String::new();
    while let Some(c) = cursor.peek() {
        if c == '\n' {
            break;
        }
        if c == '#' && raw.chars().last().is_none_or(char::is_whitespace) {
            cursor.skip_line();
            return raw.trim_end().to_string();
        }
        raw.push(c);
        cursor.bump();
    }
    cursor.bump();
    raw.trim_end().to_string()
}

/// After a closing quote only blanks and a comment may follow.
fn end_of_line(cursor: &mut Cursor) -> Option<()> {
    cursor.skip_blanks();
    match cursor.peek() {
        None => Some(()),
        Some('#' | '\n') => {
            cursor.skip_line();
            Some(())
        }
        Some('\r') => {
            cursor.bump();
            (cursor.bump().is_none_or(|c| c == '\n')).then_some(())
        }
        Some(_) => None,
    }
}

fn template(raw: &str, double_quoted: bool) -> Option<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek().copied() {
                Some('$') => {
                    chars.next();
                    literal.push('$');
                }
                Some(next) if double_quoted => {
                    let unescaped = match next {
                        'n' => Some('\n'),
                        'r' => Some('\r'),
                        't' => Some('\t'),
                        '"' => Some('"'),
                        '\\' => Some('\\'),
                        _ => None,
                    };
                    match unescaped {
                        Some(u) => {
                            chars.next();
                            literal.push(u);
                        }
                        None => literal.push('\\'),
                    }
                }
                _ => literal.push('\\'),
            },
            '$' => match reference(&mut chars)? {
                Some((name, raw)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Reference { name, raw });
                }
                None => literal.push('$'),
            },
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Some(segments)
}

/// Reads the name after a `$`. The outer `None` is an unterminated or empty
/// `${...}`; the inner `None` means the `$` is literal.
fn reference(chars: &mut Peekable<Chars<'_>>) -> Option<Option<(String, String)>> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut name = String::new();
        loop {
            match chars.next()? {
                '}' => break,
                c if is_name_char(c) => name.push(c),
                _ => return None,
            }
        }
        if name.is_empty() {
            return None;
        }
        let raw = format!("${{{name}}}");
        return Some(Some((name, raw)));
    }

    let mut name = String::new();
    while let Some(c) = chars.peek().copied().filter(|c| is_name_char(*c)) {
        name.push(c);
        chars.next();
    }
    if name.is_empty() {
        return Some(None);
    }
    let raw = format!("${name}");
    Some(Some((name, raw)))
}
