//! Error types for table export and plotting.

use thiserror::Error;

/// Export errors. All of them are fatal to a run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error opening, writing or closing the sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the table writer.
    #[error("Table write error: {0}")]
    Csv(#[from] csv::Error),

    /// The plotting process could not be started or failed.
    #[error("Renderer error: {0}")]
    Renderer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_from() {
        let err: ExportError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ExportError::Io(_)));
        assert_eq!(format!("{}", err), "I/O error: gone");
    }

    #[test]
    fn test_renderer_display() {
        let err = ExportError::Renderer("python3 exited with status 1".to_string());
        assert_eq!(
            format!("{}", err),
            "Renderer error: python3 exited with status 1"
        );
    }
}
