use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProjectError>;

/// Errors raised while projecting a tree to text.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("failed to write XML: {0}")]
    Xml(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("projected text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
