use thiserror::Error;

pub type AtlasResult<T> = Result<T, AtlasError>;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("explorer runtime is no longer running")]
    RuntimeClosed,

    #[error("unsupported data source `{0}`")]
    UnsupportedSource(String),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}
