//! Postfix chains: member access, calls, indexing, `++`/`--`.

use brew_diagnostic::ErrorCode;
use brew_ir::{NodeId, NodeKind, PostfixOp, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Apply postfix operators to `expr` until none follow.
    pub(super) fn parse_postfix(&mut self, mut expr: NodeId) -> Result<NodeId, ParseError> {
        loop {
            let start = self.node_span(expr).start;
            expr = match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    self.parse_member_suffix(start, expr)?
                }
                TokenKind::LBracket => {
                    let open = self.advance();
                    let index = self.parse_expr()?;
                    self.expect_closing(TokenKind::RBracket, open)?;
                    self.alloc(NodeKind::ArrayAccess, self.span_from(start), &[expr, index])
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    let op = if self.advance().kind == TokenKind::PlusPlus {
                        PostfixOp::Inc
                    } else {
                        PostfixOp::Dec
                    };
                    self.alloc(NodeKind::Postfix(op), self.span_from(start), &[expr])
                }
                _ => return Ok(expr),
            };
        }
    }

    /// After `.`: a field, a method call, or `Outer.this` / `Outer.super`.
    fn parse_member_suffix(&mut self, start: u32, target: NodeId) -> Result<NodeId, ParseError> {
        // Explicit method type arguments: `obj.<T>method()`.
        if let Some(len) = self.type_arguments_end() {
            for _ in 0..len {
                self.advance();
            }
            let (name, _) = self.expect_ident()?;
            let args = self.parse_arguments()?;
            return Ok(self.alloc(
                NodeKind::MethodCall {
                    name,
                    has_receiver: true,
                },
                self.span_from(start),
                &[target, args],
            ));
        }

        if matches!(self.current_kind(), TokenKind::This | TokenKind::Super) {
            let keyword = self.advance();
            let name = self.intern(self.text(keyword));
            return Ok(self.alloc(NodeKind::FieldAccess { name }, self.span_from(start), &[target]));
        }

        if !self.check(TokenKind::Ident) {
            return Err(ParseError::expected(
                ErrorCode::ExpectedIdentifier,
                "member name",
                self.current(),
            ));
        }
        let (name, _) = self.expect_ident()?;
        if self.check(TokenKind::LParen) {
            let args = self.parse_arguments()?;
            return Ok(self.alloc(
                NodeKind::MethodCall {
                    name,
                    has_receiver: true,
                },
                self.span_from(start),
                &[target, args],
            ));
        }
        Ok(self.alloc(NodeKind::FieldAccess { name }, self.span_from(start), &[target]))
    }
}
