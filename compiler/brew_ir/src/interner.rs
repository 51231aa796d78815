//! Per-tree string interner for identifiers and qualified names.
//!
//! Each parse owns one interner, which moves into the finished
//! [`SyntaxTree`](crate::SyntaxTree). No locking: the interner is only
//! written while the tree is being built.

use super::Name;
use rustc_hash::FxHashMap;

/// String interner mapping identifier text to compact [`Name`]s.
#[derive(Clone, Debug)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        interner.intern("");
        interner
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        let index = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("string interner overflow: more than u32::MAX names"));
        let name = Name::from_index(index);
        self.strings.push(text.into());
        self.map.insert(text.into(), name);
        name
    }

    /// Look up the text of an interned name.
    ///
    /// Returns `""` for names that did not come from this interner.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of interned strings (including the empty string).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always `false`: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
