use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("store error: {0}")]
    Store(#[from] client::StoreError),
    #[error("auth error: {0}")]
    Auth(#[from] client::AuthError),
    #[error(transparent)]
    Post(#[from] engine::PostError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not logged in; run `arto login` first")]
    NotLoggedIn,
    #[error("{0}")]
    Invalid(String),
}
