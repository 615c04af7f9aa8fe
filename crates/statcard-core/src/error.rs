pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error("Invalid stats snapshot: {message}")]
    InvalidSnapshot { message: String },
}

/// Machine-readable failure class reported by a stats source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceErrorCode {
    Database,
    SourceNotFound,
    InvalidData,
}

impl DataSourceErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Database => "DATABASE_ERROR",
            Self::SourceNotFound => "SOURCE_NOT_FOUND",
            Self::InvalidData => "INVALID_DATA",
        }
    }
}

impl std::fmt::Display for DataSourceErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DataSourceError {
    pub code: DataSourceErrorCode,
    pub message: String,
}

impl DataSourceError {
    pub fn new(code: DataSourceErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
