use std::fmt;

/// Lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    /// `^`, between a property, its operator and its value.
    Separator,
    /// `,`, between children of a logical node.
    Delimiter,
    /// One of the fixed operator keywords.
    Operator,
    /// Any other run of word characters.
    Operand,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::OpenBracket => write!(f, "'['"),
            TokenKind::CloseBracket => write!(f, "']'"),
            TokenKind::Separator => write!(f, "'^'"),
            TokenKind::Delimiter => write!(f, "','"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Operand => write!(f, "operand"),
        }
    }
}

/// A classified lexeme with the byte offset where it starts in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: String,
    offset: usize,
}

impl Token {
    /// A token of `kind` whose text starts at byte `offset` of the source.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            offset,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Operator | TokenKind::Operand => write!(f, "{} '{}'", self.kind, self.value),
            _ => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_structural() {
        let token = Token::new(TokenKind::Separator, "^", 4);
        assert_eq!(token.to_string(), "'^'");
        assert_eq!(token.offset(), 4);
    }

    #[test]
    fn display_word_tokens() {
        assert_eq!(
            Token::new(TokenKind::Operator, "GT", 0).to_string(),
            "operator 'GT'"
        );
        assert_eq!(
            Token::new(TokenKind::Operand, "age", 1).to_string(),
            "operand 'age'"
        );
    }
}
