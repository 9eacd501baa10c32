//! Direct-import lookup and implicit-import classification.
//!
//! A symbol can resolve to a document the current one never imports
//! directly, only through a chain of imports (`a` imports `b`, `b` imports
//! `c`, and a name from `c` is visible while editing `a`). Hover flags that
//! case so the user can see the dependency is indirect.

use smol_str::SmolStr;

use super::resolve::ResolvedSymbol;
use super::symbols::SymbolTable;

/// The documents `current` imports directly, in source order.
///
/// Empty when the table has no entry for `current`. Transitive imports are
/// not included.
pub fn direct_imports_of<'a>(table: &'a SymbolTable, current: &str) -> &'a [SmolStr] {
    table
        .get(current)
        .map(|entry| entry.imports.as_slice())
        .unwrap_or(&[])
}

/// Whether `symbol` is visible only through a transitive import.
///
/// A same-document declaration is never implicit, whatever the import list
/// says. Otherwise the symbol is implicit exactly when its declaring
/// document is absent from the current document's direct imports. Document
/// identifiers compare by exact string equality; no path canonicalization
/// happens here.
pub fn is_implicit(symbol: &ResolvedSymbol<'_>, direct_imports: &[SmolStr]) -> bool {
    if symbol.path.is_current() {
        return false;
    }
    !direct_imports.iter().any(|import| import == symbol.document)
}
