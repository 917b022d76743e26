use thiserror::Error;

/// Everything that can go wrong between the board and the backend.
///
/// A backend that answers with a non-success status and a JSON `detail` is not
/// an error here: it is reported as [`crate::board::models::ApiReply::Rejected`].
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0} cannot be used as a base url")]
    CannotBeABase(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{0}` is not a row number")]
    BadRow(String),
}
