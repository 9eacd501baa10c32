//! Symbol resolution — finding the declaration an identifier refers to.
//!
//! Resolution is a plain scan over the caller's [`SymbolTable`] snapshot.
//! There is no cache and no fallback strategy: either some document in the
//! table declares the name, or the lookup comes back empty, which is a
//! normal outcome rather than an error.

use super::paths::{DocumentLocation, document_path};
use super::symbols::{Mixin, SymbolKind, SymbolTable, Variable};

/// The declaration a lookup found, borrowed from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolInfo<'a> {
    Variable(&'a Variable),
    Mixin(&'a Mixin),
}

/// A declaration located somewhere in the workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSymbol<'a> {
    /// Identifier of the declaring document, exactly as the table spells it.
    pub document: &'a str,
    /// The declaring document normalized for display against the current one.
    pub path: DocumentLocation,
    pub info: SymbolInfo<'a>,
}

/// Find the declaration of `name` across the table.
///
/// Entries are scanned in table order and, within an entry, the
/// kind-matching list is scanned in declaration order. The first exact,
/// case-sensitive match wins. This is deliberately a first-match policy,
/// not best-match: when several documents declare the same name, the one
/// the table lists first is reported. Callers supply entries in import
/// precedence order (nearest declaration first); no precedence is computed
/// here.
pub fn resolve<'a>(
    table: &'a SymbolTable,
    kind: SymbolKind,
    name: &str,
    current_path: &str,
) -> Option<ResolvedSymbol<'a>> {
    for entry in table.iter() {
        let info = match kind {
            SymbolKind::Variable => entry
                .variables
                .iter()
                .find(|variable| variable.name == name)
                .map(SymbolInfo::Variable),
            SymbolKind::Mixin => entry
                .mixins
                .iter()
                .find(|mixin| mixin.name == name)
                .map(SymbolInfo::Mixin),
        };

        if let Some(info) = info {
            tracing::trace!(
                "[RESOLVE] Found {} '{}' in '{}'",
                kind.display(),
                name,
                entry.document
            );
            return Some(ResolvedSymbol {
                document: entry.document.as_str(),
                path: document_path(current_path, &entry.document),
                info,
            });
        }
    }

    tracing::debug!(
        "[RESOLVE] No {} named '{}' in any of {} documents",
        kind.display(),
        name,
        table.len()
    );
    None
}
