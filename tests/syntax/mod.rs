//! Syntax tree tests
//!
//! Tests for:
//! - Cursor-offset to node mapping

pub mod tests_tree;
