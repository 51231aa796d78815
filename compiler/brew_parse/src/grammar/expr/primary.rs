//! Primary expressions: literals, names, `this`/`super`, parentheses,
//! class literals and instance creation.

use brew_diagnostic::ErrorCode;
use brew_ir::{LiteralKind, NodeId, NodeKind, TokenKind};
use smallvec::SmallVec;
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let current = self.current();
        trace!(kind = %current.kind, "primary");

        let literal = match current.kind {
            TokenKind::IntLiteral => Some(LiteralKind::Int),
            TokenKind::FloatLiteral => Some(LiteralKind::Float),
            TokenKind::CharLiteral => Some(LiteralKind::Char),
            TokenKind::StringLiteral => Some(LiteralKind::String),
            TokenKind::True => Some(LiteralKind::True),
            TokenKind::False => Some(LiteralKind::False),
            TokenKind::Null => Some(LiteralKind::Null),
            _ => None,
        };
        if let Some(kind) = literal {
            self.advance();
            return Ok(self.alloc(NodeKind::Literal(kind), current.span, &[]));
        }

        match current.kind {
            TokenKind::Ident => {
                if self.at_class_literal() {
                    return self.parse_class_literal();
                }
                let (name, span) = self.expect_ident()?;
                if self.check(TokenKind::LParen) {
                    let args = self.parse_arguments()?;
                    return Ok(self.alloc(
                        NodeKind::MethodCall {
                            name,
                            has_receiver: false,
                        },
                        self.span_from(start),
                        &[args],
                    ));
                }
                Ok(self.alloc(NodeKind::Name { ident: name }, span, &[]))
            }
            TokenKind::This | TokenKind::Super => {
                self.advance();
                let is_super = current.kind == TokenKind::Super;
                if self.check(TokenKind::LParen) {
                    let args = self.parse_arguments()?;
                    return Ok(self.alloc(
                        NodeKind::ExplicitCtorCall { is_super },
                        self.span_from(start),
                        &[args],
                    ));
                }
                let kind = if is_super { NodeKind::Super } else { NodeKind::This };
                Ok(self.alloc(kind, current.span, &[]))
            }
            TokenKind::LParen => {
                let open = self.advance();
                let inner = self.parse_expr()?;
                self.expect_closing(TokenKind::RParen, open)?;
                Ok(self.alloc(NodeKind::Paren, self.span_from(start), &[inner]))
            }
            TokenKind::New => self.parse_new(),
            kind if (kind == TokenKind::Void || kind.is_primitive_type())
                && matches!(self.peek_kind(1), TokenKind::Dot | TokenKind::LBracket) =>
            {
                self.parse_class_literal()
            }
            // The lexer already reported this token.
            TokenKind::Error => {
                self.advance();
                Ok(self.alloc(NodeKind::Error, current.span, &[]))
            }
            _ => Err(ParseError::expected(
                ErrorCode::ExpectedExpression,
                "expression",
                current,
            )),
        }
    }

    /// True if `Name[].class` or `a.b.C.class` starts here.
    fn at_class_literal(&mut self) -> bool {
        if !matches!(self.peek_kind(1), TokenKind::Dot | TokenKind::LBracket) {
            return false;
        }
        self.speculate(|p| {
            p.skip_type() && p.check(TokenKind::Dot) && p.peek_kind(1) == TokenKind::Class
        })
    }

    /// `Type.class` / `void.class`.
    fn parse_class_literal(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let ty = self.parse_return_type()?;
        self.expect(TokenKind::Dot)?;
        self.expect(TokenKind::Class)?;
        Ok(self.alloc(NodeKind::ClassLiteral, self.span_from(start), &[ty]))
    }

    /// `( args )`.
    pub(crate) fn parse_arguments(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let open = self.expect(TokenKind::LParen)?;
        let mut args: SmallVec<[NodeId; 4]> = SmallVec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(self.alloc(NodeKind::Arguments, self.span_from(start), &args))
    }

    /// `new T(args) { body }?` or `new T[n][]` / `new T[] { ... }`.
    ///
    /// For arrays the `TypeRef` covers only the element type name and
    /// carries the total dimension count, sized and unsized.
    fn parse_new(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.expect(TokenKind::New)?;
        if let Some(len) = self.type_arguments_end() {
            // Constructor type arguments: `new <T>Foo()`.
            for _ in 0..len {
                self.advance();
            }
        }
        let type_start = self.start();
        let (name, type_args) = self.parse_type_name()?;
        let type_span = self.span_from(type_start);

        if !self.check(TokenKind::LBracket) {
            let ty = self.alloc(NodeKind::TypeRef { name, dims: 0 }, type_span, &type_args);
            let args = self.parse_arguments()?;
            let mut children: SmallVec<[NodeId; 3]> = SmallVec::new();
            children.extend([ty, args]);
            if self.check(TokenKind::LBrace) {
                children.push(self.parse_class_body()?);
            }
            return Ok(self.alloc(NodeKind::NewObject, self.span_from(start), &children));
        }

        let mut dim_exprs: SmallVec<[NodeId; 2]> = SmallVec::new();
        let mut dims = 0u8;
        while self.check(TokenKind::LBracket) {
            if self.peek_kind(1) == TokenKind::RBracket {
                self.advance();
                self.advance();
            } else if usize::from(dims) == dim_exprs.len() {
                let open = self.advance();
                dim_exprs.push(self.parse_expr()?);
                self.expect_closing(TokenKind::RBracket, open)?;
            } else {
                // `new int[][3]`: a sized dimension after an unsized one
                // is an array access on the creation.
                break;
            }
            dims = dims.saturating_add(1);
        }

        let ty = self.alloc(NodeKind::TypeRef { name, dims }, type_span, &type_args);
        let mut children: SmallVec<[NodeId; 4]> = SmallVec::new();
        children.push(ty);
        children.extend(dim_exprs.iter().copied());
        if self.check(TokenKind::LBrace) {
            children.push(self.parse_array_init()?);
        } else if dim_exprs.is_empty() {
            return Err(ParseError::expected(
                ErrorCode::UnexpectedToken,
                "array dimension or initializer",
                self.current(),
            ));
        }
        Ok(self.alloc(NodeKind::NewArray, self.span_from(start), &children))
    }

    /// `{ a, { b, c }, }`.
    pub(crate) fn parse_array_init(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| {
            let start = self.start();
            let open = self.expect(TokenKind::LBrace)?;
            let mut elements: SmallVec<[NodeId; 8]> = SmallVec::new();
            while !self.check(TokenKind::RBrace) {
                elements.push(if self.check(TokenKind::LBrace) {
                    self.parse_array_init()?
                } else {
                    self.parse_expr()?
                });
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect_closing(TokenKind::RBrace, open)?;
            Ok(self.alloc(NodeKind::ArrayInit, self.span_from(start), &elements))
        })
    }
}
