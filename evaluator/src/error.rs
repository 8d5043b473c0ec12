
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadFailure {
    #[error(transparent)]
    Reported(#[from] anyhow::Error),
    // the source failed without telling us why
    #[error("failed to read file")]
    Unspecified,
}

impl From<std::io::Error> for ReadFailure {
    fn from(err: std::io::Error) -> Self {
        ReadFailure::Reported(err.into())
    }
}

#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error(transparent)]
    Read(#[from] ReadFailure),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
