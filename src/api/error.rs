use reqwest::StatusCode;
use thiserror::Error;

use super::retry::RetryError;

/// Failures of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No connection could be established within the retry budget.
    #[error("backend unreachable after {attempts} attempts")]
    Transport { attempts: u32 },
    /// The backend answered with a status other than 200.
    #[error("backend responded with status {status}")]
    Backend { status: StatusCode },
    /// A request failure that is not retried, such as a timeout after connecting.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The response body could not be interpreted.
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("query is empty")]
    EmptyQuery,
    #[error("no documents to upload")]
    EmptyBatch,
}

impl ApiError {
    pub const fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// The HTTP status, if the backend answered at all.
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Backend { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<RetryError<reqwest::Error>> for ApiError {
    fn from(err: RetryError<reqwest::Error>) -> Self {
        match err {
            RetryError::Exhausted { attempts } => Self::Transport { attempts },
            RetryError::Failed(e) => Self::Request(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_maps_to_transport() {
        let err = ApiError::from(RetryError::<reqwest::Error>::Exhausted { attempts: 10 });
        assert!(err.is_transport_failure());
        assert!(err.status().is_none());
        assert!(err.to_string().contains("10 attempts"));
    }

    #[test]
    fn test_backend_exposes_status() {
        let err = ApiError::Backend {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(!err.is_transport_failure());
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
