use crate::lex::{Token, TokenKind};
use crate::{Condition, LogicalOp, Operator};

use super::error::{Expected, ParseError};

// Grammar, one token of lookahead:
//
//   expr        := '(' body ')'
//   body        := leaf | logical | negation
//   leaf        := Operand '^' ( NonValueOp | ValueOp '^' Operand )
//   logical     := ('AND' | 'OR') '[' expr (',' expr)* ']'
//   negation    := 'NOT' expr

pub(super) fn parse_condition(tokens: &[Token], max_depth: usize) -> Result<Condition, ParseError> {
    let mut cursor = Cursor {
        tokens,
        pos: 0,
        depth: 0,
        max_depth,
    };
    let condition = cursor.expr()?;
    match cursor.peek() {
        Some(token) => Err(ParseError::TrailingInput {
            found: token.to_string(),
            offset: token.offset(),
        }),
        None => Ok(condition),
    }
}

struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'t> Cursor<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self, expected: Expected) -> Result<&'t Token, ParseError> {
        let token = self
            .peek()
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, ParseError> {
        self.expect_as(kind, Expected::Kind(kind))
    }

    fn expect_as(&mut self, kind: TokenKind, expected: Expected) -> Result<&'t Token, ParseError> {
        let token = self.advance(expected)?;
        if token.kind() == kind {
            Ok(token)
        } else {
            Err(unexpected(token, expected))
        }
    }

    // -- Productions --------------------------------------------------------

    fn expr(&mut self) -> Result<Condition, ParseError> {
        let open = self.expect(TokenKind::OpenParen)?;
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                max_depth: self.max_depth,
                offset: open.offset(),
            });
        }
        self.depth += 1;
        let condition = self.body()?;
        self.expect(TokenKind::CloseParen)?;
        self.depth -= 1;
        Ok(condition)
    }

    fn body(&mut self) -> Result<Condition, ParseError> {
        let token = self
            .peek()
            .ok_or(ParseError::UnexpectedEnd {
                expected: Expected::NodeStart,
            })?;
        match token.kind() {
            TokenKind::Operand => self.leaf(),
            TokenKind::Operator => {
                self.pos += 1;
                match Operator::from_keyword(token.value()) {
                    Some(Operator::Logical(op)) => self.logical(op),
                    Some(Operator::Not) => Ok(Condition::negate(self.expr()?)),
                    _ => Err(unknown_operator(token, Expected::NodeStart)),
                }
            }
            _ => Err(unexpected(token, Expected::NodeStart)),
        }
    }

    fn leaf(&mut self) -> Result<Condition, ParseError> {
        let property = self.expect(TokenKind::Operand)?.value();
        self.expect(TokenKind::Separator)?;
        let op_token = self.expect_as(TokenKind::Operator, Expected::LeafOperator)?;

        match Operator::from_keyword(op_token.value()) {
            Some(Operator::NonValue(op)) => Ok(Condition::non_value(property, op)),
            Some(Operator::Equality(op)) => {
                let operand = self.comparand()?;
                Ok(Condition::comparison(property, op, operand.value()))
            }
            Some(Operator::Numeric(op)) => {
                let operand = self.comparand()?;
                Condition::numeric(property, op, operand.value()).map_err(|source| {
                    ParseError::InvalidOperand {
                        offset: operand.offset(),
                        source,
                    }
                })
            }
            Some(Operator::String(op)) => {
                let operand = self.comparand()?;
                Ok(Condition::string_match(property, op, operand.value()))
            }
            _ => Err(unknown_operator(op_token, Expected::LeafOperator)),
        }
    }

    fn comparand(&mut self) -> Result<&'t Token, ParseError> {
        self.expect(TokenKind::Separator)?;
        self.expect(TokenKind::Operand)
    }

    fn logical(&mut self, op: LogicalOp) -> Result<Condition, ParseError> {
        self.expect(TokenKind::OpenBracket)?;
        if let Some(token) = self.peek() {
            if token.kind() == TokenKind::CloseBracket {
                return Err(ParseError::EmptyLogical {
                    op,
                    expected: Expected::Kind(TokenKind::OpenParen),
                    offset: token.offset(),
                });
            }
        }

        let mut children = vec![self.expr()?];
        loop {
            let token = self.advance(Expected::DelimiterOrClose)?;
            match token.kind() {
                TokenKind::Delimiter => children.push(self.expr()?),
                TokenKind::CloseBracket => break,
                _ => return Err(unexpected(token, Expected::DelimiterOrClose)),
            }
        }
        Ok(Condition::Logical { op, children })
    }
}

fn unexpected(token: &Token, expected: Expected) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: token.to_string(),
        offset: token.offset(),
    }
}

fn unknown_operator(token: &Token, expected: Expected) -> ParseError {
    ParseError::UnknownOperator {
        keyword: token.value().to_owned(),
        expected,
        offset: token.offset(),
    }
}
