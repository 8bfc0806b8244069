pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] codegraph_graph::Error),

    #[error("Symbol source failed for {document}: {message}")]
    SymbolSource { document: String, message: String },

    #[error("Invalid symbol JSON: {message}")]
    InvalidSymbolJson { message: String },

    #[error("Unknown symbol: {name}")]
    UnknownSymbol { name: String },
}
