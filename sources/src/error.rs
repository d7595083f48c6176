use thiserror::Error;

/// Custom error type for fetching, allow us to differentiate between errors.
///
/// Per-target failures (`Transport`, `BadStatus`, `EmptyBody`) are recorded
/// and only become fatal once every candidate URL has been tried.
///
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} from {url}")]
    BadStatus { url: String, status: u16 },
    #[error("received empty response from {url}")]
    EmptyBody { url: String },
    #[error("failed to fetch fuel data")]
    Exhausted,
}
