use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timed out fetching package: {0}")]
    Timeout(String),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to decode response: {0}")]
    Parse(String),
}

/// Coarse classification of a failed fetch, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Timeout,
    Parse,
    Other,
}

impl RegistryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RegistryError::NotFound(_) => FailureKind::NotFound,
            RegistryError::Timeout(_) => FailureKind::Timeout,
            RegistryError::Network(e) if e.is_timeout() => FailureKind::Timeout,
            RegistryError::Parse(_) => FailureKind::Parse,
            RegistryError::Network(_) | RegistryError::InvalidResponse(_) => FailureKind::Other,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Not a stable version: {0:?}")]
    Unstable(String),

    #[error("No stable version to choose from")]
    EmptyInput,
}
