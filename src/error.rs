use thiserror::Error;

/// Process-level failures: anything that stops the service from starting or
/// shutting down cleanly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load config: {0}")]
    Config(#[from] figment::Error),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
