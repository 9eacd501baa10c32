//! Symbol types and the document-ordered symbol table.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

/// IndexMap keyed with the Fx hasher; iteration follows insertion order.
type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The kind of symbol a cursor identifier refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable,
    Mixin,
}

impl SymbolKind {
    /// Get a display string for this kind (lowercase, for log messages).
    pub fn display(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Mixin => "mixin",
        }
    }
}

/// A variable declaration: `@name: value;`
///
/// The value is the raw declaration text, never evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    /// Name without the `@` sigil.
    pub name: SmolStr,
    pub value: SmolStr,
}

impl Variable {
    pub fn new(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One parameter of a mixin declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixinParameter {
    pub name: SmolStr,
    /// Default value text, when the declaration has one.
    pub value: Option<SmolStr>,
}

impl MixinParameter {
    pub fn new(name: impl Into<SmolStr>, value: Option<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A mixin declaration: `.parent .name(@param: default) { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mixin {
    pub name: SmolStr,
    /// Enclosing selector qualifier, used only for display.
    pub parent: Option<SmolStr>,
    pub parameters: Vec<MixinParameter>,
}

impl Mixin {
    pub fn new(name: impl Into<SmolStr>, parameters: Vec<MixinParameter>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            parameters,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<SmolStr>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Everything the extraction pass found in one document.
///
/// `imports` lists only the documents this one imports directly, in source
/// order; transitive imports are visible through the table, not through this
/// list. Document identifiers compare by exact string equality everywhere,
/// so the extraction pass and the import-graph builder must agree on one
/// spelling per document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSymbols {
    pub document: SmolStr,
    pub variables: Vec<Variable>,
    pub mixins: Vec<Mixin>,
    pub imports: Vec<SmolStr>,
}

impl DocumentSymbols {
    pub fn new(document: impl Into<SmolStr>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }
}

/// Symbol entries for every document known to the workspace, in precedence
/// order.
///
/// Insertion order is the search order: lookups scan entries front to back
/// and the first match wins. Callers are expected to insert entries nearest
/// first (the current document, then its imports, and so on outward); the
/// table itself computes no precedence.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: FxIndexMap<SmolStr, DocumentSymbols>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document's symbols, keyed by its document identifier.
    ///
    /// Re-inserting a known document replaces its symbols in place and keeps
    /// its position in the search order.
    pub fn insert(&mut self, symbols: DocumentSymbols) {
        self.entries.insert(symbols.document.clone(), symbols);
    }

    /// Look up a document's entry by identifier.
    pub fn get(&self, document: &str) -> Option<&DocumentSymbols> {
        self.entries.get(document)
    }

    /// Iterate entries in precedence (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentSymbols> {
        self.entries.values()
    }

    /// Number of documents in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no documents have been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DocumentSymbols> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = DocumentSymbols>>(iter: T) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}
