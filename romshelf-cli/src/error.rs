use thiserror::Error;

/// Errors that end a CLI run with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Reading the library failed
    #[error("{0}")]
    Scan(#[from] romshelf_lib::ShelfError),

    /// Writing launcher files failed
    #[error("Export error: {0}")]
    Export(#[from] romshelf_frontend::FrontendError),

    /// Logger setup error
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
