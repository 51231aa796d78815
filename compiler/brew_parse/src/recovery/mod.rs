//! Error recovery for the parser.
//!
//! Provides token sets and panic-mode synchronization for continuing
//! parsing after errors. Token sets are `u128` bitsets keyed by
//! [`TokenKind::discriminant_index`], so membership is a single AND.

use brew_ir::TokenKind;

use crate::cursor::TokenCursor;

/// A set of token kinds with O(1) membership testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Keywords that start a type declaration.
pub const TYPE_DECL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Interface)
    .with(TokenKind::Enum);

/// Modifier keywords and annotations.
pub const MODIFIER_START: TokenSet = TokenSet::new()
    .with(TokenKind::Public)
    .with(TokenKind::Protected)
    .with(TokenKind::Private)
    .with(TokenKind::Static)
    .with(TokenKind::Final)
    .with(TokenKind::Abstract)
    .with(TokenKind::Native)
    .with(TokenKind::Synchronized)
    .with(TokenKind::Transient)
    .with(TokenKind::Volatile)
    .with(TokenKind::Strictfp)
    .with(TokenKind::At);

/// Top-level boundaries: the next import or type declaration.
pub const TOP_LEVEL_RECOVERY: TokenSet = TYPE_DECL_START
    .union(MODIFIER_START)
    .with(TokenKind::Import)
    .with(TokenKind::Package);

/// Member boundaries inside a class body.
pub const MEMBER_RECOVERY: TokenSet = TYPE_DECL_START
    .union(MODIFIER_START)
    .with(TokenKind::Void);

/// Statement boundaries inside a block.
pub const STMT_RECOVERY: TokenSet = TYPE_DECL_START
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Do)
    .with(TokenKind::For)
    .with(TokenKind::Return)
    .with(TokenKind::Break)
    .with(TokenKind::Continue)
    .with(TokenKind::Throw)
    .with(TokenKind::Try)
    .with(TokenKind::Switch)
    .with(TokenKind::Synchronized)
    .with(TokenKind::Assert)
    .with(TokenKind::Final);

/// Statement boundaries inside a switch group, where labels also end a
/// statement list.
pub const SWITCH_RECOVERY: TokenSet = STMT_RECOVERY
    .with(TokenKind::Case)
    .with(TokenKind::Default);

/// Panic-mode synchronization.
///
/// Skips tokens until one of:
/// - a `;` at the starting brace depth, which is consumed
/// - a `}` that would close the enclosing block, which is not consumed
/// - a token in `recovery` at the starting brace depth, not consumed
/// - end of input
///
/// Braces opened while skipping are skipped as a unit, so a recovery
/// keyword nested inside them does not stop the scan.
///
/// Returns `true` if a boundary was found, `false` at end of input.
pub fn synchronize(cursor: &mut TokenCursor<'_>, recovery: TokenSet) -> bool {
    let mut depth = 0u32;
    while !cursor.is_at_end() {
        match cursor.current_kind() {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace if depth == 0 => return true,
            TokenKind::RBrace => depth -= 1,
            TokenKind::Semicolon if depth == 0 => {
                cursor.advance();
                return true;
            }
            kind if depth == 0 && recovery.contains(kind) => return true,
            _ => {}
        }
        cursor.advance();
    }
    false
}

#[cfg(test)]
mod tests;
