//! Declaration modifier flags.

use bitflags::bitflags;

bitflags! {
    /// Modifier keywords attached to a declaration.
    ///
    /// The parser records every modifier it sees; which combinations are legal
    /// for a given declaration is a semantic question and is not checked.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const NATIVE = 1 << 6;
        const SYNCHRONIZED = 1 << 7;
        const TRANSIENT = 1 << 8;
        const VOLATILE = 1 << 9;
        const STRICTFP = 1 << 10;
        /// Interface `default` method.
        const DEFAULT = 1 << 11;
    }
}

impl Modifiers {
    /// Source keywords in canonical order, for display.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        const TABLE: [(Modifiers, &str); 12] = [
            (Modifiers::PUBLIC, "public"),
            (Modifiers::PROTECTED, "protected"),
            (Modifiers::PRIVATE, "private"),
            (Modifiers::ABSTRACT, "abstract"),
            (Modifiers::DEFAULT, "default"),
            (Modifiers::STATIC, "static"),
            (Modifiers::FINAL, "final"),
            (Modifiers::TRANSIENT, "transient"),
            (Modifiers::VOLATILE, "volatile"),
            (Modifiers::SYNCHRONIZED, "synchronized"),
            (Modifiers::NATIVE, "native"),
            (Modifiers::STRICTFP, "strictfp"),
        ];
        TABLE
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, kw)| kw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_in_canonical_order() {
        let mods = Modifiers::FINAL | Modifiers::PUBLIC | Modifiers::STATIC;
        assert_eq!(
            mods.keywords().collect::<Vec<_>>(),
            ["public", "static", "final"]
        );
    }
}
