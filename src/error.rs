use thiserror::Error;

/// Errors that can occur while parsing or ordering version strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version number '{0}'")]
    InvalidVersionFormat(String),

    #[error("Cannot sort versions that mix normal and reversed ordering")]
    MixedSortDirection,
}

/// Errors returned by the upgrade gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpgradeError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Version '{candidate}' is not newer than the installed version '{installed}'")]
    NotNewer { installed: String, candidate: String },
}

/// Errors that can occur while reading or migrating a legacy wiring document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WiringError {
    #[error("Failed to parse wiring JSON: {0}")]
    JsonParseError(String),

    #[error("Malformed wiring document at '{path}': {reason}")]
    MalformedWiringDocument { path: String, reason: String },
}

impl WiringError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        WiringError::MalformedWiringDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
