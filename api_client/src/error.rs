use reqwest::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ApiClientError {
    // The request never produced a response.
    Transport(reqwest::Error),
    // The API answered with a non-success status.
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    // The response body did not match the expected payload.
    Decode(reqwest::Error),
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::Transport(err) => write!(f, "failed to fetch: {err}"),
            ApiClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "api error {status}: {message}")
                } else {
                    write!(f, "api error {status}")
                }
            }
            ApiClientError::Decode(err) => write!(f, "api response decode error: {err}"),
        }
    }
}

impl std::error::Error for ApiClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiClientError::Transport(err) | ApiClientError::Decode(err) => Some(err),
            ApiClientError::Upstream { .. } => None,
        }
    }
}
