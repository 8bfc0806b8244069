//! Symbol records as reported by a document-symbol provider.
//!
//! The serde shape follows the provider's JSON dump: ranges are `[start, end]` arrays, kinds
//! are numbers, and a URI carries at least its `path`.

use serde::{Deserialize, Serialize};

/// Zero-based line/character position. Orders by line, then character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Position; 2]", into = "[Position; 2]")]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Both ends are inclusive.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
}

impl From<[Position; 2]> for Range {
    fn from([start, end]: [Position; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Range> for [Position; 2] {
    fn from(range: Range) -> Self {
        [range.start, range.end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uri {
    pub path: String,
}

impl Uri {
    pub fn file(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub uri: Uri,
    pub range: Range,
}

impl Location {
    pub fn new(uri: Uri, range: Range) -> Self {
        Self { uri, range }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unknown symbol kind: {0}")]
pub struct UnknownSymbolKind(pub u8);

/// Editor symbol kinds, numbered the way document-symbol providers report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum SymbolKind {
    File = 0,
    Module = 1,
    Namespace = 2,
    Package = 3,
    Class = 4,
    Method = 5,
    Property = 6,
    Field = 7,
    Constructor = 8,
    Enum = 9,
    Interface = 10,
    Function = 11,
    Variable = 12,
    Constant = 13,
    String = 14,
    Number = 15,
    Boolean = 16,
    Array = 17,
    Object = 18,
    Key = 19,
    Null = 20,
    EnumMember = 21,
    Struct = 22,
    Event = 23,
    Operator = 24,
    TypeParameter = 25,
}

impl SymbolKind {
    const ALL: [SymbolKind; 26] = [
        Self::File,
        Self::Module,
        Self::Namespace,
        Self::Package,
        Self::Class,
        Self::Method,
        Self::Property,
        Self::Field,
        Self::Constructor,
        Self::Enum,
        Self::Interface,
        Self::Function,
        Self::Variable,
        Self::Constant,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Array,
        Self::Object,
        Self::Key,
        Self::Null,
        Self::EnumMember,
        Self::Struct,
        Self::Event,
        Self::Operator,
        Self::TypeParameter,
    ];
}

impl TryFrom<u8> for SymbolKind {
    type Error = UnknownSymbolKind;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(UnknownSymbolKind(raw))
    }
}

impl From<SymbolKind> for u8 {
    fn from(kind: SymbolKind) -> Self {
        kind as u8
    }
}

/// A symbol with its nested symbols (class members, nested functions, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    /// Signature or type, e.g. `int ()` for C++ functions. Empty for some languages.
    pub detail: String,
    pub kind: SymbolKind,
    pub location: Location,
    #[serde(default)]
    pub children: Vec<Symbol>,
}

/// A symbol without its children: what a graph vertex stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolInformation {
    pub name: String,
    pub detail: String,
    pub kind: SymbolKind,
    pub location: Location,
}

impl From<Symbol> for SymbolInformation {
    fn from(symbol: Symbol) -> Self {
        let Symbol {
            name,
            detail,
            kind,
            location,
            children: _,
        } = symbol;
        Self {
            name,
            detail,
            kind,
            location,
        }
    }
}

impl From<&Symbol> for SymbolInformation {
    fn from(symbol: &Symbol) -> Self {
        Self {
            name: symbol.name.clone(),
            detail: symbol.detail.clone(),
            kind: symbol.kind,
            location: symbol.location.clone(),
        }
    }
}
