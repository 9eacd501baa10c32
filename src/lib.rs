//! # cascade-base
//!
//! Core library for LESS stylesheet AST, symbol tables, and semantic analysis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → editor features (hover)
//!   ↓
//! hir       → symbol model, path normalization, cross-document resolution
//!   ↓
//! syntax    → node tree primitives (NodeKind, SyntaxTree, TreeBuilder)
//! ```
//!
//! The text parser, the symbol-extraction pass, and the LSP server live in
//! sibling crates; this crate defines the data model they target and the
//! resolution pipeline the editor features are built from. Every operation
//! here is a pure function over caller-supplied snapshots; the crate
//! performs no I/O and holds no shared state.

// ============================================================================
// MODULES (dependency order: syntax → hir → ide)
// ============================================================================

/// Syntax primitives: node kinds, the arena-backed node tree, tree builder
pub mod syntax;

/// Symbol model: per-document symbol entries, path normalization, resolution
pub mod hir;

/// Editor features: hover
pub mod ide;

// Re-export commonly needed items
pub use hir::{DocumentLocation, DocumentSymbols, SymbolKind, SymbolTable};
pub use syntax::{NodeId, NodeKind, SyntaxTree, TreeBuilder, TreeError};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
