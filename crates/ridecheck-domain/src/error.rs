use thiserror::Error;

/// Uniform outcome for every failed remote call. Callers never see raw
/// transport or parse errors, only this taxonomy.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("service unreachable at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("malformed response body from {endpoint}: {source}")]
    MalformedBody {
        endpoint: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type TransportResult<T> = Result<T, TransportError>;
