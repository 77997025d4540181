use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum RowGraphError {
    #[error("Query result has {found} column(s), but a node graph needs at least 2")]
    #[diagnostic(
        code(rowgraph::insufficient_columns),
        help(
            "Select at least a source and a target column; an optional third column assigns groups"
        )
    )]
    InsufficientColumns { found: usize },

    #[error("Query result contains no rows")]
    #[diagnostic(
        code(rowgraph::empty_dataset),
        help("Column roles are read from the first row, so an empty result cannot be graphed")
    )]
    EmptyDataset,

    #[error("JSON serialization error")]
    #[diagnostic(
        code(rowgraph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(rowgraph::io_error),
        help("Check that the render payload sink is writable")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(rowgraph::config_error),
        help("Check the builder calls and option values")
    )]
    ConfigurationError { message: String },
}
