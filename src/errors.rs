use thiserror::Error;

/// Application-level error aggregating failures from every collaborator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Domain(#[from] bolso_domain::DomainError),
    #[error(transparent)]
    Core(#[from] bolso_core::CoreError),
    #[error(transparent)]
    Config(#[from] bolso_config::ConfigError),
    #[error(transparent)]
    Storage(#[from] bolso_storage_json::StorageError),
    #[error(transparent)]
    Mirror(#[from] bolso_mirror::MirrorError),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("no user profile recorded yet; complete onboarding first")]
    ProfileMissing,
}
