#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed state file {file}: {message}")]
    Format { file: String, message: String },
}

impl StoreError {
    pub(crate) fn format(file: &str, err: impl std::fmt::Display) -> Self {
        Self::Format {
            file: file.to_string(),
            message: err.to_string(),
        }
    }
}
