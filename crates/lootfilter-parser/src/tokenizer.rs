//! Pull-based scanner over a single filter line.
//!
//! The [`Tokenizer`] never builds a token list. Rule validators ask for the
//! kind of token they expect next and get `None` when the text at the cursor
//! is something else. A failed scan only consumes leading whitespace, so the
//! caller can retry with another token kind or report the text as invalid.
//!
//! Token ranges are character columns on the tokenizer's row. Scanning works
//! on byte offsets; lines that are pure ASCII skip the conversion.

use std::fmt;

use winnow::{
    Parser,
    ascii::{Caseless, digit1},
    combinator::{alt, eof, opt, peek, preceded, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, take_till, take_while},
};

use lootfilter_core::text::Range;

type Input<'a> = LocatingSlice<&'a str>;

/// A scanned value with the range it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<T> {
    pub value: T,
    pub range: Range,
}

impl<T> Token<T> {
    pub fn new(value: T, range: Range) -> Self {
        Self { value, range }
    }
}

/// A comparison operator preceding rule values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl Operator {
    /// Returns the operator as written in a filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
        }
    }

    /// Returns `true` for `=`.
    pub fn is_equal(&self) -> bool {
        matches!(self, Operator::Equal)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Succeeds without consuming input when the next character is whitespace or
/// the line has ended.
fn boundary(input: &mut Input<'_>) -> ModalResult<()> {
    peek(alt((take_while(1.., char::is_whitespace).void(), eof.void()))).parse_next(input)
}

fn word<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_while(1.., char::is_alphanumeric).parse_next(input)
}

/// A double-quoted string. An unterminated quote runs to the end of the line.
fn quoted<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    preceded('"', terminated(take_till(0.., '"'), opt('"'))).parse_next(input)
}

fn bare<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '"')
        .verify(|s: &str| !s.starts_with('#'))
        .parse_next(input)
}

fn string<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    alt((quoted, bare)).parse_next(input)
}

fn number(input: &mut Input<'_>) -> ModalResult<i64> {
    terminated((opt('-'), digit1).take(), boundary)
        .try_map(str::parse::<i64>)
        .parse_next(input)
}

fn boolean(input: &mut Input<'_>) -> ModalResult<bool> {
    terminated(
        alt((
            literal(Caseless("true")).value(true),
            literal(Caseless("false")).value(false),
        )),
        boundary,
    )
    .parse_next(input)
}

fn operator(input: &mut Input<'_>) -> ModalResult<Operator> {
    terminated(
        alt((
            literal(">=").value(Operator::GreaterEqual),
            literal("<=").value(Operator::LessEqual),
            literal("=").value(Operator::Equal),
            literal(">").value(Operator::Greater),
            literal("<").value(Operator::Less),
        )),
        boundary,
    )
    .parse_next(input)
}

/// A cursor over one line of filter text.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    line: &'a str,
    input: Input<'a>,
    row: u32,
    ascii: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer for `line`, which sits on zero-based `row`.
    ///
    /// `line` must not contain a line break.
    pub fn new(line: &'a str, row: u32) -> Self {
        Self {
            line,
            input: LocatingSlice::new(line),
            row,
            ascii: line.is_ascii(),
        }
    }

    /// Scan a maximal run of alphanumeric characters.
    pub fn next_word(&mut self) -> Option<Token<&'a str>> {
        self.scan(word)
    }

    /// Scan a quoted string (without its quotes) or a bare run of
    /// non-whitespace characters that does not start a comment.
    pub fn next_string(&mut self) -> Option<Token<&'a str>> {
        self.scan(string)
    }

    /// Scan an integer followed by whitespace or the end of the line.
    pub fn next_number(&mut self) -> Option<Token<i64>> {
        self.scan(number)
    }

    /// Scan `True` or `False` in any letter case.
    pub fn next_boolean(&mut self) -> Option<Token<bool>> {
        self.scan(boolean)
    }

    /// Scan a comparison operator followed by whitespace or the end of the
    /// line.
    pub fn next_operator(&mut self) -> Option<Token<Operator>> {
        self.scan(operator)
    }

    /// Returns `true` if only whitespace remains.
    pub fn is_empty(&self) -> bool {
        self.remaining().trim().is_empty()
    }

    /// Returns `true` if the remaining text is a comment.
    pub fn is_commented(&self) -> bool {
        self.remaining().trim_start().starts_with('#')
    }

    /// Returns `true` if nothing but whitespace or a comment remains.
    pub fn is_ignored(&self) -> bool {
        self.is_empty() || self.is_commented()
    }

    /// Column of the first non-whitespace character.
    pub fn text_start_index(&self) -> u32 {
        self.column(self.line.len() - self.line.trim_start().len())
    }

    /// Column just after the last non-whitespace character.
    pub fn text_end_index(&self) -> u32 {
        self.column(self.line.trim_end().len())
    }

    /// Column of the cursor.
    pub fn current_index(&self) -> u32 {
        self.column(self.input.current_token_start())
    }

    /// Length of the line in characters.
    pub fn original_length(&self) -> u32 {
        self.column(self.line.len())
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    /// Range from the first to just after the last non-whitespace character.
    pub fn text_range(&self) -> Range {
        let start = self.text_start_index();
        Range::on_line(self.row, start, self.text_end_index().max(start))
    }

    /// Empty range at the cursor.
    pub fn cursor(&self) -> Range {
        Range::point(self.row, self.current_index())
    }

    /// Skip whitespace and return the range of whatever text is left.
    pub fn remainder(&mut self) -> Range {
        self.skip_whitespace();
        let start = self.current_index();
        Range::on_line(self.row, start, self.text_end_index().max(start))
    }

    fn remaining(&self) -> &'a str {
        *self.input
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let skip = rest.len() - rest.trim_start().len();
        self.input.next_slice(skip);
    }

    fn scan<O>(
        &mut self,
        mut parser: impl Parser<Input<'a>, O, ErrMode<ContextError>>,
    ) -> Option<Token<O>> {
        self.skip_whitespace();
        let checkpoint = self.input.checkpoint();
        let start = self.input.current_token_start();

        match parser.parse_next(&mut self.input) {
            Ok(value) => {
                let end = self.input.current_token_start();
                let range = Range::on_line(self.row, self.column(start), self.column(end));
                Some(Token::new(value, range))
            }
            Err(_) => {
                self.input.reset(&checkpoint);
                None
            }
        }
    }

    /// Convert a byte offset into the line to a character column.
    fn column(&self, offset: usize) -> u32 {
        let characters = if self.ascii {
            offset
        } else {
            self.line[..offset].chars().count()
        };
        u32::try_from(characters).unwrap_or(u32::MAX)
    }
}
