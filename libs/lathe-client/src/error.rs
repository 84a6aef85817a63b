#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("config error: {0}")]
    Config(String),

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to stage data: {0}")]
    Stage(String),

    #[error("report failed: {0}")]
    Report(String),

    #[error("invalid result index '{0}'")]
    InvalidIndex(String),
}
