use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No files found")]
    NoFilesFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid asset pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read matched path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Upload failed: {reason}")]
    UploadFailed { reason: String },
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

/// Upload error helpers
impl AppError {
    pub fn upload_failed(reason: &str) -> Self {
        Self::UploadFailed {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_files_found_message_is_fixed() {
        assert_eq!(AppError::NoFilesFound.to_string(), "No files found");
    }

    #[test]
    fn upload_failed_carries_reason() {
        let err = AppError::upload_failed(&format!("endpoint returned {}", 502));
        assert_eq!(err.to_string(), "Upload failed: endpoint returned 502");
    }
}
