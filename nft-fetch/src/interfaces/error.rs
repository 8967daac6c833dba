use reqwest::StatusCode;
use std::path::PathBuf;

/// Errors raised while querying one of the GraphQL APIs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("error while fetching data from {api} API")]
    Transport {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {api} API")]
    Decode {
        api: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{api} API returned errors: {messages}")]
    Api { api: &'static str, messages: String },
    #[error("{api} API response has no `{field}` data")]
    MissingData {
        api: &'static str,
        field: &'static str,
    },
}

/// Errors for a single image download. Never fatal to a batch.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server response error: {0}")]
    Status(StatusCode),
    #[error("could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the local output directory.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("error while creating output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("error while creating {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid option combinations, detected before any network I/O.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required option --{0}")]
    MissingOption(&'static str),
    #[error("At least one of --data or --images is required")]
    NothingToDownload,
}
