//! Blocks and statements.
//!
//! Block statements are local class declarations, local variable
//! declarations or statements. A statement that fails is replaced by an
//! `Error` node and the block continues at the next statement boundary.

use brew_diagnostic::ErrorCode;
use brew_ir::{NodeId, NodeKind, Span, Token, TokenKind};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::exceptions::{self, Redundancy};
use crate::recovery::{TokenSet, STMT_RECOVERY, SWITCH_RECOVERY};
use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

type Stmts = SmallVec<[NodeId; 8]>;

impl Parser<'_> {
    /// `{ statements }`.
    ///
    /// A missing `}` is reported but the block is still completed.
    pub(crate) fn parse_block(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| {
            let start = self.start();
            let open = self.expect(TokenKind::LBrace)?;
            let stmts = self.parse_block_statements(STMT_RECOVERY);
            self.close_body(open);
            Ok(self.alloc(NodeKind::Block, self.span_from(start), &stmts))
        })
    }

    /// Statements up to a `}`, or up to a `case`/`default` label inside a
    /// switch group.
    fn parse_block_statements(&mut self, recovery: TokenSet) -> Stmts {
        let in_switch = recovery.contains(TokenKind::Case);
        let mut stmts = Stmts::new();
        loop {
            match self.current_kind() {
                TokenKind::RBrace | TokenKind::Eof => break,
                TokenKind::Case | TokenKind::Default if in_switch => break,
                _ => {}
            }
            let pos = self.cursor.position();
            let start = self.start();
            match self.parse_block_statement() {
                Ok(id) => stmts.push(id),
                Err(err) => stmts.push(self.recover(&err, start, pos, recovery)),
            }
        }
        stmts
    }

    fn parse_block_statement(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        match self.current_kind() {
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum => {
                let modifiers = self.parse_modifiers()?;
                self.parse_type_decl(start, modifiers)
            }
            TokenKind::Final | TokenKind::Abstract | TokenKind::Strictfp | TokenKind::At => {
                let modifiers = self.parse_modifiers()?;
                if matches!(
                    self.current_kind(),
                    TokenKind::Class | TokenKind::Interface | TokenKind::Enum
                ) {
                    return self.parse_type_decl(start, modifiers);
                }
                self.parse_local_var_stmt(start, modifiers)
            }
            _ if self.at_local_var_decl() => {
                let modifiers = self.parse_modifiers()?;
                self.parse_local_var_stmt(start, modifiers)
            }
            _ => self.parse_statement(),
        }
    }

    fn parse_local_var_stmt(&mut self, start: u32, modifiers: NodeId) -> Result<NodeId, ParseError> {
        let children = self.parse_local_var_parts(modifiers)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.alloc(NodeKind::LocalVarDecl, self.span_from(start), &children))
    }

    /// `Type a = 1, b[] = {}` after the modifiers.
    fn parse_local_var_parts(&mut self, modifiers: NodeId) -> Result<SmallVec<[NodeId; 4]>, ParseError> {
        let ty = self.parse_type()?;
        let (name, span) = self.expect_ident()?;
        let mut children: SmallVec<[NodeId; 4]> = smallvec![modifiers, ty];
        children.extend(self.parse_var_declarators(name, span)?);
        Ok(children)
    }

    /// A single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| {
            let start = self.start();
            match self.current_kind() {
                TokenKind::LBrace => self.parse_block(),
                TokenKind::Semicolon => {
                    self.advance();
                    Ok(self.alloc(NodeKind::Empty, self.span_from(start), &[]))
                }
                TokenKind::If => self.parse_if(),
                TokenKind::While => self.parse_while(),
                TokenKind::Do => self.parse_do_while(),
                TokenKind::For => self.parse_for(),
                TokenKind::Return => self.parse_return(),
                TokenKind::Break | TokenKind::Continue => self.parse_jump(),
                TokenKind::Throw => self.parse_throw(),
                TokenKind::Try => self.parse_try(),
                TokenKind::Switch => self.parse_switch(),
                TokenKind::Synchronized if self.peek_kind(1) == TokenKind::LParen => {
                    self.parse_synchronized()
                }
                TokenKind::Assert => self.parse_assert(),
                TokenKind::Ident if self.peek_kind(1) == TokenKind::Colon => self.parse_labeled(),
                TokenKind::Else
                | TokenKind::Case
                | TokenKind::Default
                | TokenKind::Catch
                | TokenKind::Finally => Err(ParseError::expected(
                    ErrorCode::UnexpectedToken,
                    "statement",
                    self.current(),
                )),
                _ => {
                    let expr = self.parse_expr()?;
                    self.expect(TokenKind::Semicolon)?;
                    Ok(self.alloc(NodeKind::ExprStmt, self.span_from(start), &[expr]))
                }
            }
        })
    }

    /// `( expr )` after a statement keyword.
    fn parse_paren_condition(&mut self) -> Result<NodeId, ParseError> {
        let open = self.expect(TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(expr)
    }

    fn parse_if(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let condition = self.parse_paren_condition()?;
        let then_branch = self.parse_statement()?;
        let mut children: SmallVec<[NodeId; 3]> = smallvec![condition, then_branch];
        let has_else = self.eat(TokenKind::Else);
        if has_else {
            children.push(self.parse_statement()?);
        }
        Ok(self.alloc(NodeKind::If { has_else }, self.span_from(start), &children))
    }

    fn parse_while(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let condition = self.parse_paren_condition()?;
        let body = self.parse_statement()?;
        Ok(self.alloc(NodeKind::While, self.span_from(start), &[condition, body]))
    }

    fn parse_do_while(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let body = self.parse_statement()?;
        self.expect(TokenKind::While)?;
        let condition = self.parse_paren_condition()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.alloc(NodeKind::DoWhile, self.span_from(start), &[body, condition]))
    }

    /// Basic `for (init; cond; update)` or enhanced `for (T x : iterable)`.
    fn parse_for(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let open = self.expect(TokenKind::LParen)?;

        let init_start = self.start();
        let mut init: SmallVec<[NodeId; 2]> = SmallVec::new();
        if !self.check(TokenKind::Semicolon) {
            if matches!(self.current_kind(), TokenKind::Final | TokenKind::At) || self.at_local_var_decl() {
                let modifiers = self.parse_modifiers()?;
                let ty = self.parse_type()?;
                let (name, name_span) = self.expect_ident()?;
                if self.eat(TokenKind::Colon) {
                    let var = self.alloc(NodeKind::VarDeclarator { name, dims: 0 }, name_span, &[]);
                    let iterable = self.parse_expr()?;
                    self.expect_closing(TokenKind::RParen, open)?;
                    let body = self.parse_statement()?;
                    return Ok(self.alloc(
                        NodeKind::ForEach,
                        self.span_from(start),
                        &[modifiers, ty, var, iterable, body],
                    ));
                }
                let mut children: SmallVec<[NodeId; 4]> = smallvec![modifiers, ty];
                children.extend(self.parse_var_declarators(name, name_span)?);
                init.push(self.alloc(NodeKind::LocalVarDecl, self.span_from(init_start), &children));
            } else {
                init.extend(self.parse_expr_list()?);
            }
        }
        let init = self.alloc(NodeKind::ForInit, self.span_from(init_start), &init);
        self.expect(TokenKind::Semicolon)?;

        let mut children: SmallVec<[NodeId; 4]> = smallvec![init];
        let has_condition = !self.check(TokenKind::Semicolon);
        if has_condition {
            children.push(self.parse_expr()?);
        }
        self.expect(TokenKind::Semicolon)?;

        let update_start = self.start();
        let update = if self.check(TokenKind::RParen) {
            SmallVec::new()
        } else {
            self.parse_expr_list()?
        };
        children.push(self.alloc(NodeKind::ForUpdate, self.span_from(update_start), &update));
        self.expect_closing(TokenKind::RParen, open)?;

        children.push(self.parse_statement()?);
        Ok(self.alloc(NodeKind::For { has_condition }, self.span_from(start), &children))
    }

    fn parse_expr_list(&mut self) -> Result<SmallVec<[NodeId; 2]>, ParseError> {
        let mut exprs = SmallVec::new();
        loop {
            exprs.push(self.parse_expr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(exprs)
    }

    fn parse_return(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let mut value: SmallVec<[NodeId; 1]> = SmallVec::new();
        if !self.check(TokenKind::Semicolon) {
            value.push(self.parse_expr()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(self.alloc(NodeKind::Return, self.span_from(start), &value))
    }

    /// `break label?;` / `continue label?;`
    fn parse_jump(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let keyword = self.advance();
        let label = if self.check(TokenKind::Ident) {
            Some(self.expect_ident()?.0)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        let kind = if keyword.kind == TokenKind::Break {
            NodeKind::Break { label }
        } else {
            NodeKind::Continue { label }
        };
        Ok(self.alloc(kind, self.span_from(start), &[]))
    }

    fn parse_throw(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.alloc(NodeKind::Throw, self.span_from(start), &[value]))
    }

    fn parse_synchronized(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let lock = self.parse_paren_condition()?;
        let body = self.parse_block()?;
        Ok(self.alloc(NodeKind::Synchronized, self.span_from(start), &[lock, body]))
    }

    /// `assert cond;` / `assert cond : message;`
    fn parse_assert(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let condition = self.parse_expr()?;
        let mut children: SmallVec<[NodeId; 2]> = smallvec![condition];
        let has_message = self.eat(TokenKind::Colon);
        if has_message {
            children.push(self.parse_expr()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(self.alloc(NodeKind::Assert { has_message }, self.span_from(start), &children))
    }

    fn parse_labeled(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let (label, _) = self.expect_ident()?;
        self.expect(TokenKind::Colon)?;
        let body = self.parse_statement()?;
        Ok(self.alloc(NodeKind::Labeled { label }, self.span_from(start), &[body]))
    }

    // ─── try ───────────────────────────────────────────────────────

    /// `try (resources)? block catch* finally?`
    ///
    /// A `try` with neither `catch` nor `finally` is reported at the `try`
    /// keyword, and an empty `Error` node after the block marks the spot
    /// where a clause was expected.
    fn parse_try(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let keyword = self.advance();
        let mut children: SmallVec<[NodeId; 4]> = SmallVec::new();
        if self.check(TokenKind::LParen) {
            children.push(self.parse_resource_spec()?);
        }
        children.push(self.parse_block()?);

        let mut has_handler = false;
        while self.check(TokenKind::Catch) {
            children.push(self.parse_catch_clause()?);
            has_handler = true;
        }
        if self.check(TokenKind::Finally) {
            let finally_start = self.start();
            self.advance();
            let block = self.parse_block()?;
            children.push(self.alloc(NodeKind::Finally, self.span_from(finally_start), &[block]));
            has_handler = true;
        }

        if !has_handler {
            self.report_missing_handler(keyword);
            let at = self.previous_span().end;
            children.push(self.alloc(NodeKind::Error, Span::point(at), &[]));
        }
        Ok(self.alloc(NodeKind::Try, self.span_from(start), &children))
    }

    #[cold]
    fn report_missing_handler(&mut self, keyword: Token) {
        let err = ParseError::new(
            ErrorCode::MissingCatchOrFinally,
            "`try` without `catch` or `finally`",
            keyword.span,
        )
        .with_note("add a `catch` or `finally` clause after the block");
        self.report(&err);
    }

    /// `( Resource ; Resource ;? )`. Resources may also be separated by `,`.
    fn parse_resource_spec(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let open = self.expect(TokenKind::LParen)?;
        let mut resources: SmallVec<[NodeId; 2]> = SmallVec::new();
        while !self.check(TokenKind::RParen) && !self.is_at_end() {
            resources.push(self.parse_resource()?);
            if !(self.eat(TokenKind::Semicolon) || self.eat(TokenKind::Comma)) {
                break;
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(self.alloc(NodeKind::ResourceSpec, self.span_from(start), &resources))
    }

    fn parse_resource(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let modifiers = self.parse_modifiers()?;
        let ty = self.parse_type()?;
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let init = self.parse_expr()?;
        Ok(self.alloc(
            NodeKind::Resource { name },
            self.span_from(start),
            &[modifiers, ty, init],
        ))
    }

    /// `catch (final? A | B e) block`.
    fn parse_catch_clause(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let open = self.expect(TokenKind::LParen)?;
        let is_final = self.eat(TokenKind::Final);
        let mut children: SmallVec<[NodeId; 4]> = SmallVec::new();
        loop {
            children.push(self.parse_type()?);
            if !self.eat(TokenKind::Pipe) {
                break;
            }
        }
        let (param, _) = self.expect_ident()?;
        self.expect_closing(TokenKind::RParen, open)?;
        self.check_catch_alternatives(&children);
        children.push(self.parse_block()?);
        Ok(self.alloc(
            NodeKind::CatchClause { param, is_final },
            self.span_from(start),
            &children,
        ))
    }

    /// Warn about multi-catch alternatives that are duplicates of, or
    /// related by subclassing to, another alternative.
    fn check_catch_alternatives(&mut self, types: &[NodeId]) {
        if types.len() < 2 {
            return;
        }
        let names: Vec<String> = types
            .iter()
            .map(|&id| match self.builder.kind(id) {
                NodeKind::TypeRef { name, .. } => self.builder.lookup(name).to_owned(),
                _ => String::new(),
            })
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        for (index, redundancy) in exceptions::redundant_alternatives(&refs) {
            let (message, note) = match redundancy {
                Redundancy::Duplicate { index: other } => (
                    format!("`{}` is listed more than once", names[index]),
                    format!("first listed at {}", self.node_span(types[other])),
                ),
                Redundancy::Subclass { index: other } => (
                    format!(
                        "`{}` is redundant: it is a subclass of `{}`",
                        names[index], names[other]
                    ),
                    "alternatives in a multi-catch must not be subclasses of each other".to_owned(),
                ),
                Redundancy::Superclass { index: other } => (
                    format!(
                        "`{}` already covers `{}`",
                        names[index], names[other]
                    ),
                    "alternatives in a multi-catch must not be subclasses of each other".to_owned(),
                ),
            };
            let span = self.node_span(types[index]);
            self.warn(ErrorCode::RedundantCatchType, message, span, Some(note));
        }
    }

    // ─── switch ────────────────────────────────────────────────────

    /// `switch (subject) { groups }`.
    fn parse_switch(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        self.advance();
        let subject = self.parse_paren_condition()?;
        let open = self.expect(TokenKind::LBrace)?;
        let mut children: SmallVec<[NodeId; 8]> = smallvec![subject];
        let mut first_default: Option<Token> = None;
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let pos = self.cursor.position();
            let group_start = self.start();
            match self.parse_switch_group(&mut first_default) {
                Ok(id) => children.push(id),
                Err(err) => children.push(self.recover(&err, group_start, pos, SWITCH_RECOVERY)),
            }
        }
        self.close_body(open);
        Ok(self.alloc(NodeKind::Switch, self.span_from(start), &children))
    }

    /// One or more labels followed by the statements they guard.
    fn parse_switch_group(&mut self, first_default: &mut Option<Token>) -> Result<NodeId, ParseError> {
        let start = self.start();
        let mut children = Stmts::new();
        while matches!(self.current_kind(), TokenKind::Case | TokenKind::Default) {
            children.push(self.parse_case_label(first_default)?);
        }
        if children.is_empty() {
            return Err(ParseError::expected(
                ErrorCode::UnexpectedToken,
                "`case` or `default`",
                self.current(),
            ));
        }
        children.extend(self.parse_block_statements(SWITCH_RECOVERY));
        Ok(self.alloc(NodeKind::SwitchGroup, self.span_from(start), &children))
    }

    fn parse_case_label(&mut self, first_default: &mut Option<Token>) -> Result<NodeId, ParseError> {
        let start = self.start();
        let keyword = self.advance();
        if keyword.kind == TokenKind::Case {
            let value = self.parse_conditional_expr()?;
            self.expect(TokenKind::Colon)?;
            return Ok(self.alloc(
                NodeKind::CaseLabel { is_default: false },
                self.span_from(start),
                &[value],
            ));
        }

        self.expect(TokenKind::Colon)?;
        let span = self.span_from(start);
        match first_default {
            Some(first) => {
                debug!(%span, "duplicate default label");
                let note = format!("first `default` label is at {}", first.start);
                self.warn(
                    ErrorCode::DuplicateDefaultLabel,
                    "duplicate `default` label in switch".to_owned(),
                    span,
                    Some(note),
                );
            }
            None => *first_default = Some(keyword),
        }
        Ok(self.alloc(NodeKind::CaseLabel { is_default: true }, span, &[]))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
