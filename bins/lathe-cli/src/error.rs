#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Client(#[from] lathe_client::ClientError),

    #[error("result: {0}")]
    Cursor(#[from] lathe_api::CursorError),
}
