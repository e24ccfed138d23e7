use thiserror::Error;

#[derive(Debug, Error)]
pub enum OnboardError {
    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepo(String),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("onboarding template not found: {0}")]
    TemplateNotFound(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OnboardError>;
