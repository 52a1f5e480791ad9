use thiserror::Error;

/// Stable category of a [`PageError`], attached to log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    PersistenceUnavailable,
    ClipboardDenied,
    ObservationTargetMissing,
    PrintUnavailable,
    Io,
}

/// Every variant degrades the page; none of them stops rendering.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("preference storage unavailable: {0}")]
    PersistenceUnavailable(String),
    #[error("clipboard write rejected: {0}")]
    ClipboardDenied(String),
    #[error("observation target '{0}' is not on the page")]
    ObservationTargetMissing(String),
    #[error("print/export unavailable: {0}")]
    PrintUnavailable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::PersistenceUnavailable(message.into())
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::ClipboardDenied(message.into())
    }

    pub fn print(message: impl Into<String>) -> Self {
        Self::PrintUnavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PageError::PersistenceUnavailable(_) => ErrorCode::PersistenceUnavailable,
            PageError::ClipboardDenied(_) => ErrorCode::ClipboardDenied,
            PageError::ObservationTargetMissing(_) => ErrorCode::ObservationTargetMissing,
            PageError::PrintUnavailable(_) => ErrorCode::PrintUnavailable,
            PageError::Io(_) => ErrorCode::Io,
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variants() {
        assert_eq!(
            PageError::persistence("quota").code(),
            ErrorCode::PersistenceUnavailable
        );
        assert_eq!(PageError::clipboard("denied").code(), ErrorCode::ClipboardDenied);
        assert_eq!(
            PageError::from(std::io::Error::other("disk")).code(),
            ErrorCode::Io
        );
    }
}
