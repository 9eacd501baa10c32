//! Display-path normalization between documents.
//!
//! When a symbol resolves to another document, hover shows where it came
//! from. This module turns the declaring document's identifier into a
//! display path relative to the current document's directory. It compares
//! identifier strings only; nothing here touches the filesystem.

use std::path::{Component, Path};

/// Where a resolved symbol's declaring document is, relative to the
/// document under the cursor.
///
/// A dedicated type rather than a reserved path string, so a same-document
/// declaration can never collide with a real path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentLocation {
    /// Declared in the document the cursor is in.
    Current,
    /// Declared in another document; the payload is the display path.
    Other(String),
}

impl DocumentLocation {
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }

    /// The display path, when the declaration is in another document.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Current => None,
            Self::Other(path) => Some(path),
        }
    }
}

/// Normalize `declaring` for display against `current`.
///
/// The declaring document is rendered relative to the current document's
/// directory, `/`-separated. A declaring identifier that lands on the
/// current document itself (same string, or a spelling that reduces to the
/// current file name) is [`DocumentLocation::Current`]. Identifiers that do
/// not share a root convention with `current` (absolute vs. relative) are
/// displayed as written.
pub fn document_path(current: &str, declaring: &str) -> DocumentLocation {
    if declaring == current {
        return DocumentLocation::Current;
    }

    let base = Path::new(current).parent().unwrap_or_else(|| Path::new(""));
    let display = match relative_to(base, Path::new(declaring)) {
        Some(relative) => relative,
        None => declaring.replace('\\', "/"),
    };

    let current_file = Path::new(current).file_name().and_then(|name| name.to_str());
    if current_file == Some(display.as_str()) {
        return DocumentLocation::Current;
    }

    DocumentLocation::Other(display)
}

/// `target` relative to the `base` directory, `/`-separated.
///
/// Returns `None` when the two do not share a root convention, since there
/// is no working directory to resolve either against.
fn relative_to(base: &Path, target: &Path) -> Option<String> {
    if base.is_absolute() != target.is_absolute() {
        return None;
    }

    let base: Vec<Component> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let target: Vec<Component> = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(b, t)| b == t)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..base.len() {
        parts.push("..");
    }
    for component in &target[common..] {
        parts.push(component.as_os_str().to_str()?);
    }

    if parts.is_empty() {
        return Some(String::from("."));
    }
    Some(parts.join("/"))
}
