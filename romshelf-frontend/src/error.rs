/// Errors that can occur while writing launcher files.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writing error: {0}")]
    Xml(String),

    #[error("JSON writing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FrontendError {
    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }
}
