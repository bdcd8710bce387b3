use crate::theme::ThemeError;
use thiserror::Error;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("failed to parse region list")]
    ParseRegions(#[from] serde_json::Error),
}
