use winnow::combinator::{alt, not, terminated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

use super::token::{Token, TokenKind};

/// Split notation text into tokens.
///
/// At each position the scanner tries, in order: a structural character
/// (`( ) [ ] ^ ,`), an operator keyword, and a run of word characters
/// (`[A-Za-z0-9_]`). Anything else is dropped. No grammar checks happen here.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut input = text;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let offset = text.len() - input.len();
        match lexeme.parse_next(&mut input) {
            Ok(Some((kind, value))) => tokens.push(Token::new(kind, value, offset)),
            Ok(None) => {}
            Err(_) => break,
        }
    }

    tracing::trace!(tokens = tokens.len(), "tokenized notation");
    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// -- Lexemes ----------------------------------------------------------------

fn structural(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        '('.value(TokenKind::OpenParen),
        ')'.value(TokenKind::CloseParen),
        '['.value(TokenKind::OpenBracket),
        ']'.value(TokenKind::CloseBracket),
        '^'.value(TokenKind::Separator),
        ','.value(TokenKind::Delimiter),
    ))
    .parse_next(input)
}

/// Longest keyword first, and only when no letter or underscore follows, so
/// `GT30` splits into `GT` and `30` while `ORDER` stays a single operand.
fn keyword<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    terminated(
        alt((
            alt(("LTE", "LT", "GTE", "GT", "EQ", "NE", "SW", "CT")),
            alt(("EW", "NULL", "BLANK", "EMPTY", "AND", "OR", "NOT")),
        )),
        not(one_of(|c: char| c.is_ascii_alphabetic() || c == '_')),
    )
    .parse_next(input)
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn unrecognized(input: &mut &str) -> ModalResult<()> {
    any.void().parse_next(input)
}

fn lexeme<'i>(input: &mut &'i str) -> ModalResult<Option<(TokenKind, &'i str)>> {
    alt((
        structural.with_taken().map(Some),
        keyword.map(|kw| Some((TokenKind::Operator, kw))),
        word.map(|w| Some((TokenKind::Operand, w))),
        unrecognized.value(None),
    ))
    .parse_next(input)
}
