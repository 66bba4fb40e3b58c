use std::collections::HashMap;

use crate::ast::TypeTag;

/// What the parser knows about one declared variable.
///
/// Entries exist only while parsing; nothing of this table is persisted into
/// the AST or the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Whether the declaration used `const`.
    pub is_const:      bool,
    /// The type named in the declaration. Recorded but never enforced.
    pub declared_type: TypeTag,
}

/// The parse-time symbol table.
///
/// One table is created per parse and owned by it; it validates the
/// declaration rules (no redeclaration, no use or assignment before
/// declaration, no assignment to const) and is discarded when parsing ends.
///
/// # Examples
/// ```
/// use simpl::{ast::TypeTag,
///             interpreter::parser::symbol::{SymbolInfo, SymbolTable}};
///
/// let mut symbols = SymbolTable::new();
/// let info = SymbolInfo { is_const:      false,
///                         declared_type: TypeTag::Int, };
///
/// assert!(symbols.declare("a", info));
/// assert!(!symbols.declare("a", info));
/// assert_eq!(symbols.get("a"), Some(&info));
/// assert!(symbols.get("b").is_none());
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolInfo>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Records a declaration. Returns `false` when the name is already
    /// declared, in which case the table is left unchanged.
    pub fn declare(&mut self, name: &str, info: SymbolInfo) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), info);
        true
    }

    /// Looks up a declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SymbolInfo> {
        self.entries.get(name)
    }

    /// Returns whether a name has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
