//! Compilation unit and declarations.
//!
//! Top level: optional `package`, then imports and type declarations in any
//! order. Inside a class body every member is parsed independently; a
//! member that fails is replaced by an `Error` node and the body continues
//! at the next member boundary.

use brew_diagnostic::ErrorCode;
use brew_ir::{Modifiers, Name, NodeId, NodeKind, Span, Token, TokenKind};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::recovery::{self, MEMBER_RECOVERY, TOP_LEVEL_RECOVERY};
use crate::stack::ensure_sufficient_stack;
use crate::{error, ParseError, Parser};

impl Parser<'_> {
    /// Parse the whole input into a `CompilationUnit`.
    ///
    /// The root always spans from the starting offset to the end of the
    /// source, whatever was skipped in between.
    pub(crate) fn parse_compilation_unit(&mut self) -> NodeId {
        let root_start = self.cursor.start_offset();
        let mut children: SmallVec<[NodeId; 8]> = SmallVec::new();

        if self.check(TokenKind::Package) {
            let pos = self.cursor.position();
            let start = self.start();
            match self.parse_package_decl() {
                Ok(id) => children.push(id),
                Err(err) => children.push(self.recover(&err, start, pos, TOP_LEVEL_RECOVERY)),
            }
        }

        while !self.is_at_end() {
            let pos = self.cursor.position();
            let start = self.start();
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            let result = if self.check(TokenKind::Import) {
                self.parse_import_decl()
            } else {
                self.parse_type_decl_with_modifiers()
            };
            match result {
                Ok(id) => children.push(id),
                Err(err) => children.push(self.recover_top_level(&err, start, pos)),
            }
        }

        let end = u32::try_from(self.cursor.source().len()).unwrap_or(u32::MAX);
        let span = Span::new(root_start.min(end), end);
        self.alloc(NodeKind::CompilationUnit, span, &children)
    }

    /// Recovery between top-level declarations.
    ///
    /// A `}` has no body to close at this level, so a run of stray braces
    /// and whatever lies between them is swallowed into one `Error` node
    /// with a single diagnostic.
    fn recover_top_level(&mut self, err: &ParseError, start: u32, loop_pos: usize) -> NodeId {
        self.report(err);
        recovery::synchronize(&mut self.cursor, TOP_LEVEL_RECOVERY);
        if self.cursor.position() == loop_pos && !self.is_at_end() {
            self.advance();
            recovery::synchronize(&mut self.cursor, TOP_LEVEL_RECOVERY);
        }
        while self.eat(TokenKind::RBrace) {
            recovery::synchronize(&mut self.cursor, TOP_LEVEL_RECOVERY);
        }
        let span = self.span_from(start);
        debug!(%span, "recovered at top level");
        self.alloc(NodeKind::Error, span, &[])
    }

    /// `Ident (. Ident)*`, joined with `.`.
    fn parse_qualified_name(&mut self) -> Result<String, ParseError> {
        let first = self.expect_ident_token()?;
        let mut text = self.text(first).to_owned();
        while self.check(TokenKind::Dot) && self.peek_kind(1) == TokenKind::Ident {
            self.advance();
            let ident = self.advance();
            text.push('.');
            text.push_str(self.text(ident));
        }
        Ok(text)
    }

    fn expect_ident_token(&mut self) -> Result<Token, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(
                ErrorCode::ExpectedIdentifier,
                "identifier",
                self.current(),
            ))
        }
    }

    /// `package a.b.c;`
    fn parse_package_decl(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.expect(TokenKind::Package)?;
        let path = self.parse_qualified_name()?;
        self.expect(TokenKind::Semicolon)?;
        let name = self.intern(&path);
        Ok(self.alloc(NodeKind::PackageDecl { name }, self.span_from(start), &[]))
    }

    /// `import (static)? a.b.C;` or `import (static)? a.b.*;`
    fn parse_import_decl(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.expect(TokenKind::Import)?;
        let is_static = self.eat(TokenKind::Static);
        let mut path = self.parse_qualified_name()?;
        let is_wildcard = self.check(TokenKind::Dot) && self.peek_kind(1) == TokenKind::Star;
        if is_wildcard {
            self.advance();
            self.advance();
            path.push_str(".*");
        }
        self.expect(TokenKind::Semicolon)?;
        debug!(%path, is_static, "import");
        let path = self.intern(&path);
        Ok(self.alloc(
            NodeKind::ImportDecl {
                path,
                is_static,
                is_wildcard,
            },
            self.span_from(start),
            &[],
        ))
    }

    fn parse_type_decl_with_modifiers(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let modifiers = self.parse_modifiers()?;
        self.parse_type_decl(start, modifiers)
    }

    /// Dispatch on `class` / `interface` / `enum` after the modifiers.
    pub(crate) fn parse_type_decl(&mut self, start: u32, modifiers: NodeId) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::Class => self.parse_class_decl(start, modifiers),
            TokenKind::Interface => self.parse_interface_decl(start, modifiers),
            TokenKind::Enum => self.parse_enum_decl(start, modifiers),
            _ => Err(ParseError::expected(
                ErrorCode::UnexpectedToken,
                "`class`, `interface` or `enum`",
                self.current(),
            )),
        })
    }

    fn parse_class_decl(&mut self, start: u32, modifiers: NodeId) -> Result<NodeId, ParseError> {
        self.expect(TokenKind::Class)?;
        let (name, _) = self.expect_ident()?;
        debug!(name = self.builder.lookup(name), "class declaration");

        let mut children: SmallVec<[NodeId; 8]> = smallvec![modifiers];
        if self.check(TokenKind::Lt) {
            children.push(self.parse_type_parameters()?);
        }
        if self.check(TokenKind::Extends) {
            children.push(self.parse_type_clause(TokenKind::Extends, NodeKind::Extends)?);
        }
        if self.check(TokenKind::Implements) {
            children.push(self.parse_type_clause(TokenKind::Implements, NodeKind::Implements)?);
        }
        children.push(self.parse_class_body()?);
        Ok(self.alloc(NodeKind::ClassDecl { name }, self.span_from(start), &children))
    }

    fn parse_interface_decl(&mut self, start: u32, modifiers: NodeId) -> Result<NodeId, ParseError> {
        self.expect(TokenKind::Interface)?;
        let (name, _) = self.expect_ident()?;
        debug!(name = self.builder.lookup(name), "interface declaration");

        let mut children: SmallVec<[NodeId; 8]> = smallvec![modifiers];
        if self.check(TokenKind::Lt) {
            children.push(self.parse_type_parameters()?);
        }
        if self.check(TokenKind::Extends) {
            children.push(self.parse_type_clause(TokenKind::Extends, NodeKind::Extends)?);
        }
        children.push(self.parse_class_body()?);
        Ok(self.alloc(NodeKind::InterfaceDecl { name }, self.span_from(start), &children))
    }

    fn parse_enum_decl(&mut self, start: u32, modifiers: NodeId) -> Result<NodeId, ParseError> {
        self.expect(TokenKind::Enum)?;
        let (name, _) = self.expect_ident()?;
        debug!(name = self.builder.lookup(name), "enum declaration");

        let mut children: SmallVec<[NodeId; 8]> = smallvec![modifiers];
        if self.check(TokenKind::Implements) {
            children.push(self.parse_type_clause(TokenKind::Implements, NodeKind::Implements)?);
        }

        let open = self.expect(TokenKind::LBrace)?;
        while self.check(TokenKind::Ident) || self.check(TokenKind::At) {
            children.push(self.parse_enum_constant()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        let body_start = self.start();
        let members = if self.eat(TokenKind::Semicolon) {
            self.parse_members()
        } else {
            SmallVec::new()
        };
        self.close_body(open);
        children.push(self.alloc(NodeKind::ClassBody, self.span_from(body_start), &members));
        Ok(self.alloc(NodeKind::EnumDecl { name }, self.span_from(start), &children))
    }

    /// `@Ann NAME (args)? { body }?`
    fn parse_enum_constant(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let modifiers = self.parse_modifiers()?;
        let (name, _) = self.expect_ident()?;
        let mut children: SmallVec<[NodeId; 3]> = smallvec![modifiers];
        if self.check(TokenKind::LParen) {
            children.push(self.parse_arguments()?);
        }
        if self.check(TokenKind::LBrace) {
            children.push(self.parse_class_body()?);
        }
        Ok(self.alloc(NodeKind::EnumConstant { name }, self.span_from(start), &children))
    }

    /// `extends A, B` / `implements A, B` / `throws A, B`.
    fn parse_type_clause(&mut self, keyword: TokenKind, kind: NodeKind) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.expect(keyword)?;
        let types = self.parse_type_list()?;
        Ok(self.alloc(kind, self.span_from(start), &types))
    }

    /// `{ members }`.
    pub(crate) fn parse_class_body(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let open = self.expect(TokenKind::LBrace)?;
        let members = self.parse_members();
        self.close_body(open);
        Ok(self.alloc(NodeKind::ClassBody, self.span_from(start), &members))
    }

    /// Consume the `}` that closes `open`, or report it missing.
    ///
    /// A missing `}` does not fail the enclosing production: the body is
    /// completed up to where parsing stopped.
    pub(crate) fn close_body(&mut self, open: Token) {
        if self.eat(TokenKind::RBrace) {
            return;
        }
        let err = ParseError::expected(ErrorCode::UnbalancedDelimiter, "`}`", self.current())
            .with_note(format!(
                "unclosed {} opened at {}",
                error::describe(open.kind),
                open.start
            ));
        self.report(&err);
    }

    fn parse_members(&mut self) -> SmallVec<[NodeId; 8]> {
        let mut members = SmallVec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let pos = self.cursor.position();
            let start = self.start();
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            match self.parse_member() {
                Ok(id) => members.push(id),
                Err(err) => members.push(self.recover(&err, start, pos, MEMBER_RECOVERY)),
            }
        }
        members
    }

    /// One class body member: initializer, nested type, constructor,
    /// method or field.
    fn parse_member(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        if self.check(TokenKind::LBrace) {
            let block = self.parse_block()?;
            return Ok(self.alloc(
                NodeKind::Initializer { is_static: false },
                self.span_from(start),
                &[block],
            ));
        }
        if self.check(TokenKind::Static) && self.peek_kind(1) == TokenKind::LBrace {
            self.advance();
            let block = self.parse_block()?;
            return Ok(self.alloc(
                NodeKind::Initializer { is_static: true },
                self.span_from(start),
                &[block],
            ));
        }

        let modifiers = self.parse_modifiers()?;
        match self.current_kind() {
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum => {
                self.parse_type_decl(start, modifiers)
            }
            TokenKind::Lt => {
                let type_params = self.parse_type_parameters()?;
                if self.check(TokenKind::Ident) && self.peek_kind(1) == TokenKind::LParen {
                    self.parse_constructor(start, modifiers, Some(type_params))
                } else {
                    self.parse_method_or_field(start, modifiers, Some(type_params))
                }
            }
            TokenKind::Ident if self.peek_kind(1) == TokenKind::LParen => {
                self.parse_constructor(start, modifiers, None)
            }
            _ => self.parse_method_or_field(start, modifiers, None),
        }
    }

    fn parse_constructor(
        &mut self,
        start: u32,
        modifiers: NodeId,
        type_params: Option<NodeId>,
    ) -> Result<NodeId, ParseError> {
        let (name, _) = self.expect_ident()?;
        debug!(name = self.builder.lookup(name), "constructor");
        let mut children: SmallVec<[NodeId; 5]> = smallvec![modifiers];
        children.extend(type_params);
        children.push(self.parse_params()?);
        if self.check(TokenKind::Throws) {
            children.push(self.parse_type_clause(TokenKind::Throws, NodeKind::Throws)?);
        }
        children.push(self.parse_block()?);
        Ok(self.alloc(NodeKind::ConstructorDecl { name }, self.span_from(start), &children))
    }

    /// After modifiers: `Type name (...)` is a method, `Type name ...;` a field.
    fn parse_method_or_field(
        &mut self,
        start: u32,
        modifiers: NodeId,
        type_params: Option<NodeId>,
    ) -> Result<NodeId, ParseError> {
        let ty = self.parse_return_type()?;
        let (name, name_span) = self.expect_ident()?;

        if type_params.is_some() || self.check(TokenKind::LParen) {
            return self.parse_method_rest(start, modifiers, type_params, ty, name);
        }

        let mut children: SmallVec<[NodeId; 4]> = smallvec![modifiers, ty];
        children.extend(self.parse_var_declarators(name, name_span)?);
        self.expect(TokenKind::Semicolon)?;
        Ok(self.alloc(NodeKind::FieldDecl, self.span_from(start), &children))
    }

    fn parse_method_rest(
        &mut self,
        start: u32,
        modifiers: NodeId,
        type_params: Option<NodeId>,
        return_type: NodeId,
        name: Name,
    ) -> Result<NodeId, ParseError> {
        debug!(name = self.builder.lookup(name), "method");
        let mut children: SmallVec<[NodeId; 6]> = smallvec![modifiers];
        children.extend(type_params);
        children.push(return_type);
        children.push(self.parse_params()?);
        // Legacy `int f()[]` form.
        self.parse_dims();
        if self.check(TokenKind::Throws) {
            children.push(self.parse_type_clause(TokenKind::Throws, NodeKind::Throws)?);
        }
        if self.check(TokenKind::LBrace) {
            children.push(self.parse_block()?);
        } else {
            self.expect(TokenKind::Semicolon)?;
        }
        Ok(self.alloc(NodeKind::MethodDecl { name }, self.span_from(start), &children))
    }

    /// `(Param, Param...)`.
    fn parse_params(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let open = self.expect(TokenKind::LParen)?;
        let mut params: SmallVec<[NodeId; 4]> = SmallVec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(self.alloc(NodeKind::Params, self.span_from(start), &params))
    }

    fn parse_param(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let modifiers = self.parse_modifiers()?;
        let ty = self.parse_type()?;
        let varargs = self.eat(TokenKind::Ellipsis);
        let (name, _) = self.expect_ident()?;
        self.parse_dims();
        Ok(self.alloc(
            NodeKind::Param { name, varargs },
            self.span_from(start),
            &[modifiers, ty],
        ))
    }

    /// `name [] = init, name2 = init2` after the first name was consumed.
    pub(crate) fn parse_var_declarators(
        &mut self,
        first: Name,
        first_span: Span,
    ) -> Result<SmallVec<[NodeId; 2]>, ParseError> {
        let mut declarators = SmallVec::new();
        declarators.push(self.parse_var_declarator_rest(first, first_span)?);
        while self.eat(TokenKind::Comma) {
            let (name, span) = self.expect_ident()?;
            declarators.push(self.parse_var_declarator_rest(name, span)?);
        }
        Ok(declarators)
    }

    fn parse_var_declarator_rest(&mut self, name: Name, name_span: Span) -> Result<NodeId, ParseError> {
        let dims = self.parse_dims();
        let mut init: SmallVec<[NodeId; 1]> = SmallVec::new();
        if self.eat(TokenKind::Eq) {
            init.push(if self.check(TokenKind::LBrace) {
                self.parse_array_init()?
            } else {
                self.parse_expr()?
            });
        }
        Ok(self.alloc(
            NodeKind::VarDeclarator { name, dims },
            self.span_from(name_span.start),
            &init,
        ))
    }

    // ─── Modifiers & annotations ───────────────────────────────────

    /// Modifier keywords and annotations, in any order.
    ///
    /// Always produces a `Modifiers` node; with nothing to consume it is
    /// empty at the current position.
    pub(crate) fn parse_modifiers(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let mut flags = Modifiers::empty();
        let mut annotations: SmallVec<[NodeId; 2]> = SmallVec::new();
        loop {
            let flag = match self.current_kind() {
                TokenKind::Public => Modifiers::PUBLIC,
                TokenKind::Protected => Modifiers::PROTECTED,
                TokenKind::Private => Modifiers::PRIVATE,
                TokenKind::Static => Modifiers::STATIC,
                TokenKind::Final => Modifiers::FINAL,
                TokenKind::Abstract => Modifiers::ABSTRACT,
                TokenKind::Native => Modifiers::NATIVE,
                TokenKind::Synchronized => Modifiers::SYNCHRONIZED,
                TokenKind::Transient => Modifiers::TRANSIENT,
                TokenKind::Volatile => Modifiers::VOLATILE,
                TokenKind::Strictfp => Modifiers::STRICTFP,
                TokenKind::Default if self.peek_kind(1) != TokenKind::Colon => Modifiers::DEFAULT,
                // `@interface` declares an annotation type, not supported.
                TokenKind::At if self.peek_kind(1) != TokenKind::Interface => {
                    annotations.push(self.parse_annotation()?);
                    continue;
                }
                _ => break,
            };
            self.advance();
            flags |= flag;
        }
        Ok(self.alloc(NodeKind::Modifiers(flags), self.span_from(start), &annotations))
    }

    /// `@Name`, `@Name(value)` or `@Name(key = value, ...)`.
    pub(crate) fn parse_annotation(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.expect(TokenKind::At)?;
        let path = self.parse_qualified_name()?;
        let name = self.intern(&path);
        let mut children: SmallVec<[NodeId; 2]> = SmallVec::new();
        if self.check(TokenKind::LParen) {
            let open = self.advance();
            if self.check(TokenKind::Ident) && self.peek_kind(1) == TokenKind::Eq {
                loop {
                    let pair_start = self.start();
                    let (key, _) = self.expect_ident()?;
                    self.expect(TokenKind::Eq)?;
                    let value = self.parse_element_value()?;
                    let span = self.span_from(pair_start);
                    children.push(self.alloc(NodeKind::AnnotationPair { name: key }, span, &[value]));
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
            } else if !self.check(TokenKind::RParen) {
                children.push(self.parse_element_value()?);
            }
            self.expect_closing(TokenKind::RParen, open)?;
        }
        Ok(self.alloc(NodeKind::Annotation { name }, self.span_from(start), &children))
    }

    fn parse_element_value(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::At => self.parse_annotation(),
            TokenKind::LBrace => {
                let start = self.start();
                let open = self.advance();
                let mut values: SmallVec<[NodeId; 4]> = SmallVec::new();
                while !self.check(TokenKind::RBrace) {
                    values.push(self.parse_element_value()?);
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.expect_closing(TokenKind::RBrace, open)?;
                Ok(self.alloc(NodeKind::ArrayInit, self.span_from(start), &values))
            }
            _ => self.parse_conditional_expr(),
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
