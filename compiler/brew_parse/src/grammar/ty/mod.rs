//! Type references, type arguments and type parameters.
//!
//! In declaration positions a `<` after a type name always opens type
//! arguments. In statement and expression positions the parser first asks
//! [`type_arguments_end`](crate::Parser::type_arguments_end) whether the
//! `<` closes like a type argument list; if not, it is a less-than.

use brew_diagnostic::ErrorCode;
use brew_ir::{Name, NodeId, NodeKind, TokenKind, WildcardBound};
use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

/// Children of a `TypeRef`: its type arguments.
pub(crate) type TypeArgs = SmallVec<[NodeId; 4]>;

impl Parser<'_> {
    /// Parse a type: primitive or qualified name, type arguments, `[]` dims.
    pub(crate) fn parse_type(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| {
            let start = self.start();
            let (name, args) = self.parse_type_name()?;
            let dims = self.parse_dims();
            Ok(self.alloc(NodeKind::TypeRef { name, dims }, self.span_from(start), &args))
        })
    }

    /// Parse a method return type: `void` or a type.
    pub(crate) fn parse_return_type(&mut self) -> Result<NodeId, ParseError> {
        if self.check(TokenKind::Void) {
            let token = self.advance();
            let name = self.intern("void");
            return Ok(self.alloc(NodeKind::TypeRef { name, dims: 0 }, token.span, &[]));
        }
        self.parse_type()
    }

    /// Parse a type name without dims: a primitive keyword, or
    /// `Ident (<args>)? (. Ident (<args>)?)*`.
    ///
    /// The name is the dotted identifier text; arguments of every segment
    /// are collected in order.
    pub(crate) fn parse_type_name(&mut self) -> Result<(Name, TypeArgs), ParseError> {
        let current = self.current();
        if current.kind.is_primitive_type() {
            self.advance();
            let name = self.intern(self.text(current));
            return Ok((name, TypeArgs::new()));
        }
        if current.kind != TokenKind::Ident {
            return Err(ParseError::expected(ErrorCode::ExpectedType, "type", current));
        }

        let mut text = String::new();
        let mut args = TypeArgs::new();
        loop {
            let ident = self.advance();
            text.push_str(self.text(ident));
            if self.check(TokenKind::Lt) {
                args.extend(self.parse_type_arguments()?);
            }
            if self.check(TokenKind::Dot) && self.peek_kind(1) == TokenKind::Ident {
                self.advance();
                text.push('.');
                continue;
            }
            break;
        }
        Ok((self.intern(&text), args))
    }

    /// Parse `<` args `>`. The diamond `<>` yields no arguments.
    pub(crate) fn parse_type_arguments(&mut self) -> Result<TypeArgs, ParseError> {
        let open = self.expect(TokenKind::Lt)?;
        let mut args = TypeArgs::new();
        if !self.check(TokenKind::Gt) {
            loop {
                args.push(self.parse_type_argument()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_closing(TokenKind::Gt, open)?;
        Ok(args)
    }

    fn parse_type_argument(&mut self) -> Result<NodeId, ParseError> {
        if !self.check(TokenKind::Question) {
            return self.parse_type();
        }
        let start = self.start();
        self.advance();
        let (bound, children) = if self.eat(TokenKind::Extends) {
            (WildcardBound::Extends, vec![self.parse_type()?])
        } else if self.eat(TokenKind::Super) {
            (WildcardBound::Super, vec![self.parse_type()?])
        } else {
            (WildcardBound::Unbounded, Vec::new())
        };
        Ok(self.alloc(NodeKind::Wildcard { bound }, self.span_from(start), &children))
    }

    /// Parse `<T extends A & B, U>` on a class or method declaration.
    pub(crate) fn parse_type_parameters(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let open = self.expect(TokenKind::Lt)?;
        let mut params: SmallVec<[NodeId; 4]> = SmallVec::new();
        loop {
            let param_start = self.start();
            let (name, _) = self.expect_ident()?;
            let mut bounds: SmallVec<[NodeId; 2]> = SmallVec::new();
            if self.eat(TokenKind::Extends) {
                bounds.push(self.parse_type()?);
                while self.eat(TokenKind::Amp) {
                    bounds.push(self.parse_type()?);
                }
            }
            let span = self.span_from(param_start);
            params.push(self.alloc(NodeKind::TypeParam { name }, span, &bounds));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::Gt, open)?;
        Ok(self.alloc(NodeKind::TypeParameters, self.span_from(start), &params))
    }

    /// Parse a comma-separated type list (`extends`, `implements`, `throws`).
    pub(crate) fn parse_type_list(&mut self) -> Result<SmallVec<[NodeId; 4]>, ParseError> {
        let mut types = SmallVec::new();
        loop {
            types.push(self.parse_type()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(types)
    }

    /// Consume `[]` pairs and count them.
    pub(crate) fn parse_dims(&mut self) -> u8 {
        let mut dims = 0u8;
        while self.check(TokenKind::LBracket) && self.peek_kind(1) == TokenKind::RBracket {
            self.advance();
            self.advance();
            dims = dims.saturating_add(1);
        }
        dims
    }

    // ─── Lookahead ─────────────────────────────────────────────────

    /// If the current `<` opens a type argument list, the number of tokens
    /// up to and including its matching `>`.
    ///
    /// Scans ahead without consuming. A `;`, `{`, `}`, `)` or end of input
    /// before the match, or any token that cannot appear inside type
    /// arguments, means the `<` is a less-than operator.
    pub(crate) fn type_arguments_end(&mut self) -> Option<usize> {
        if !self.check(TokenKind::Lt) {
            return None;
        }
        let mut depth = 0usize;
        let mut k = 0;
        loop {
            let kind = self.peek_kind(k);
            match kind {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(k + 1);
                    }
                }
                TokenKind::Ident
                | TokenKind::Dot
                | TokenKind::Comma
                | TokenKind::Question
                | TokenKind::Extends
                | TokenKind::Super
                | TokenKind::Amp
                | TokenKind::LBracket
                | TokenKind::RBracket => {}
                _ if kind.is_primitive_type() => {}
                _ => return None,
            }
            k += 1;
        }
    }

    /// Consume tokens shaped like a type, without building nodes.
    ///
    /// Returns `false` if the current token cannot start a type. A `<` that
    /// does not close like type arguments ends the type before it. Only
    /// used inside [`speculate`](Self::speculate).
    pub(crate) fn skip_type(&mut self) -> bool {
        if self.current_kind().is_primitive_type() {
            self.advance();
        } else if self.check(TokenKind::Ident) {
            loop {
                self.advance();
                if let Some(len) = self.type_arguments_end() {
                    for _ in 0..len {
                        self.advance();
                    }
                }
                if self.check(TokenKind::Dot) && self.peek_kind(1) == TokenKind::Ident {
                    self.advance();
                    continue;
                }
                break;
            }
        } else {
            return false;
        }
        self.parse_dims();
        true
    }

    /// Run a lookahead check and rewind the cursor, whatever it consumed.
    pub(crate) fn speculate(&mut self, lookahead: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.cursor.mark();
        let matched = lookahead(self);
        self.cursor.reset(mark);
        matched
    }

    /// True if a local variable declaration starts here:
    /// `Type name` followed by `=`, `;`, `,`, `[` or `:`.
    pub(crate) fn at_local_var_decl(&mut self) -> bool {
        self.speculate(|p| {
            p.skip_type()
                && p.check(TokenKind::Ident)
                && matches!(
                    p.peek_kind(1),
                    TokenKind::Eq
                        | TokenKind::Semicolon
                        | TokenKind::Comma
                        | TokenKind::LBracket
                        | TokenKind::Colon
                )
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
