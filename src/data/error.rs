use {std::path::PathBuf, thiserror::Error};

/// Failures while reading the price export. Any of these aborts the load;
/// there is no per-row recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open price file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("line {line}: unparseable date '{value}'")]
    InvalidDate { line: usize, value: String },

    #[error("line {line}: invalid price '{value}' (expected a positive number)")]
    InvalidPrice { line: usize, value: String },

    #[error("price file contains no data rows")]
    Empty,
}
