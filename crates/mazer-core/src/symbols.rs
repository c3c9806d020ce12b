//! Character-to-cell mapping configuration.

use std::collections::HashMap;

use crate::cell::CellKind;

/// Injectable mapping from maze-text characters to [`CellKind`]s.
///
/// The default table is `#`=Wall, `.`=Ground, `M`=Start, `C`=Goal,
/// `D`=Exit. Callers with different tile sets supply their own table.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    map: HashMap<char, CellKind>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::from_pairs([
            ('#', CellKind::Wall),
            ('.', CellKind::Ground),
            ('M', CellKind::Start),
            ('C', CellKind::Goal),
            ('D', CellKind::Exit),
        ])
    }
}

impl SymbolTable {
    /// Build a table from `(char, kind)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, CellKind)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Add or replace a mapping.
    pub fn insert(&mut self, ch: char, kind: CellKind) {
        self.map.insert(ch, kind);
    }

    /// Look up the cell kind for a character.
    pub fn kind_of(&self, ch: char) -> Option<CellKind> {
        self.map.get(&ch).copied()
    }

    /// Inverse lookup: the first character mapped to `kind`.
    ///
    /// Used by renderers to turn a grid back into text. With the default
    /// table the mapping is one-to-one.
    pub fn symbol_of(&self, kind: CellKind) -> Option<char> {
        let mut best: Option<char> = None;
        for (&ch, &k) in &self.map {
            if k == kind && best.is_none_or(|b| ch < b) {
                best = Some(ch);
            }
        }
        best
    }
}
