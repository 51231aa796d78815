//! Operator recognition.
//!
//! The lexer emits every `>` as its own token so nested type arguments
//! close cleanly. In expression position, adjacent `>` and `=` tokens are
//! recombined here into `>=`, `>>`, `>>>`, `>>=` and `>>>=`; tokens
//! separated by whitespace or comments never combine.

use brew_ir::{AssignOp, BinaryOp, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// The binary operator at the cursor and how many tokens it spans.
    ///
    /// Returns `None` for assignment operators, including the composed
    /// `>>=` and `>>>=`.
    pub(super) fn binary_op(&mut self) -> Option<(BinaryOp, usize)> {
        let op = match self.current_kind() {
            TokenKind::PipePipe => BinaryOp::Or,
            TokenKind::AmpAmp => BinaryOp::And,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Amp => BinaryOp::BitAnd,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Shl => BinaryOp::Shl,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Rem,
            TokenKind::Gt => {
                return match self.gt_run() {
                    (1, false) => Some((BinaryOp::Gt, 1)),
                    (1, true) => Some((BinaryOp::GtEq, 2)),
                    (2, false) => Some((BinaryOp::Shr, 2)),
                    (3, false) => Some((BinaryOp::UShr, 3)),
                    _ => None,
                };
            }
            _ => return None,
        };
        Some((op, 1))
    }

    /// The assignment operator at the cursor and how many tokens it spans.
    pub(super) fn assign_op(&mut self) -> Option<(AssignOp, usize)> {
        let op = match self.current_kind() {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::PlusEq => AssignOp::Add,
            TokenKind::MinusEq => AssignOp::Sub,
            TokenKind::StarEq => AssignOp::Mul,
            TokenKind::SlashEq => AssignOp::Div,
            TokenKind::PercentEq => AssignOp::Rem,
            TokenKind::AmpEq => AssignOp::BitAnd,
            TokenKind::PipeEq => AssignOp::BitOr,
            TokenKind::CaretEq => AssignOp::BitXor,
            TokenKind::ShlEq => AssignOp::Shl,
            TokenKind::Gt => {
                return match self.gt_run() {
                    (2, true) => Some((AssignOp::Shr, 3)),
                    (3, true) => Some((AssignOp::UShr, 4)),
                    _ => None,
                };
            }
            _ => return None,
        };
        Some((op, 1))
    }

    /// Count adjacent `>` tokens at the cursor (at most three) and report
    /// whether an adjacent `=` follows them.
    fn gt_run(&mut self) -> (usize, bool) {
        let mut count = 1;
        let mut last = self.current();
        while count < 3 {
            let next = self.cursor.peek(count);
            if next.kind != TokenKind::Gt || !last.is_adjacent_to(&next) {
                break;
            }
            last = next;
            count += 1;
        }
        let next = self.cursor.peek(count);
        (count, next.kind == TokenKind::Eq && last.is_adjacent_to(&next))
    }
}
