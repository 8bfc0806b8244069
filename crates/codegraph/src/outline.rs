//! Symbol-under-cursor lookup over a document outline.

use crate::error::{Error, Result};
use crate::symbol::{Position, Symbol, SymbolInformation};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Host-provided document outline (e.g. an editor's document-symbol provider).
///
/// Called once per query; results are neither cached nor retried here.
pub trait SymbolSource {
    fn document_symbols(&self, document: &str) -> Result<Vec<Symbol>>;
}

/// A pre-fetched outline that answers for any document.
impl SymbolSource for [Symbol] {
    fn document_symbols(&self, _document: &str) -> Result<Vec<Symbol>> {
        Ok(self.to_vec())
    }
}

impl SymbolSource for Vec<Symbol> {
    fn document_symbols(&self, document: &str) -> Result<Vec<Symbol>> {
        self.as_slice().document_symbols(document)
    }
}

/// Outlines keyed by document path.
impl<S: BuildHasher> SymbolSource for HashMap<String, Vec<Symbol>, S> {
    fn document_symbols(&self, document: &str) -> Result<Vec<Symbol>> {
        self.get(document)
            .cloned()
            .ok_or_else(|| Error::SymbolSource {
                document: document.to_string(),
                message: "no outline recorded for document".to_string(),
            })
    }
}

/// Returns the innermost symbol whose range contains `cursor`.
///
/// Siblings are tried in order and the first match wins; its children are searched next, and
/// the match itself is returned when none of them contains the cursor.
pub fn symbol_at(symbols: &[Symbol], cursor: Position) -> Option<SymbolInformation> {
    let symbol = symbols
        .iter()
        .find(|s| s.location.range.contains(cursor))?;
    symbol_at(&symbol.children, cursor).or_else(|| Some(symbol.into()))
}

/// Queries `source` for the outline of `document` and resolves the symbol at `cursor`.
///
/// Any failure of `source` is reported as [`Error::SymbolSource`].
pub fn symbol_under_cursor<S>(
    source: &S,
    document: &str,
    cursor: Position,
) -> Result<Option<SymbolInformation>>
where
    S: SymbolSource + ?Sized,
{
    let symbols = source.document_symbols(document).map_err(|err| {
        tracing::warn!(document, error = %err, "symbol source failed");
        match err {
            err @ Error::SymbolSource { .. } => err,
            other => Error::SymbolSource {
                document: document.to_string(),
                message: other.to_string(),
            },
        }
    })?;
    Ok(symbol_at(&symbols, cursor))
}

/// Parses a provider's JSON dump (an array of symbols).
pub fn symbols_from_json(text: &str) -> Result<Vec<Symbol>> {
    serde_json::from_str(text).map_err(|e| Error::InvalidSymbolJson {
        message: e.to_string(),
    })
}
