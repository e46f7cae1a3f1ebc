use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// Arguments that clap accepted but that do not form a valid selection.
    #[error("usage error: {0}")]
    Usage(String),

    #[error("{endpoint} returned HTTP {status}")]
    RemoteFailure {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected record shape.
    #[error("unexpected response from {endpoint}: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no data returned, check your coin IDs")]
    EmptyResult,

    #[error("failed to write output file: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}
