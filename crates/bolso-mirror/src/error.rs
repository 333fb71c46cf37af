use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("mirror rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("invalid row payload: {0}")]
    Decode(String),
}
