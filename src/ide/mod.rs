//! Editor features — high-level APIs for LSP handlers.
//!
//! This module is the interface between the symbol model (`hir`) and the
//! LSP server. Each function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take data in, return data out
//! 2. **No LSP types**: uses our own types, converted at the LSP boundary
//! 3. **Absence is not an error**: a request with nothing to show returns
//!    `None` or empty content, never a failure
//!
//! ## Usage
//!
//! ```
//! use cascade::hir::{DocumentSymbols, SymbolTable, Variable};
//! use cascade::ide::hover;
//! use cascade::syntax::{NodeKind, TreeBuilder};
//! use cascade::TextRange;
//!
//! let mut entry = DocumentSymbols::new("a.less");
//! entry.variables.push(Variable::new("color", "red"));
//! let table = SymbolTable::from_iter([entry]);
//!
//! let mut builder = TreeBuilder::stylesheet(TextRange::new(0.into(), 12.into()));
//! let root = builder.root();
//! let name = builder
//!     .named(root, NodeKind::VariableName, "color", TextRange::new(0.into(), 6.into()))
//!     .unwrap();
//! let tree = builder.finish();
//!
//! let result = hover(&table, &tree, name, "a.less").unwrap();
//! assert_eq!(result.contents.value, "color: red");
//! ```

mod hover;

pub use hover::{Hover, Identifier, LANGUAGE_ID, MarkedString, hover, identifier_at};
