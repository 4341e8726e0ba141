use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Sequence(#[from] seq::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Stdout was closed by the reader, e.g. `seq 1000000 | head`.
    pub fn is_broken_pipe(&self) -> bool {
        let io = match self {
            AppError::Io(e) | AppError::Sequence(seq::Error::Io(e)) => e,
            _ => return false,
        };
        io.kind() == std::io::ErrorKind::BrokenPipe
    }
}
