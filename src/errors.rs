use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "not found".to_string(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found();
        }
        Self::internal(err)
    }
}

impl From<BurstListError> for AppError {
    fn from(err: BurstListError) -> Self {
        Self::bad_gateway(err)
    }
}

impl From<ArchiveDateError> for AppError {
    fn from(err: ArchiveDateError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure to obtain a well-formed burst list.
#[derive(Debug)]
pub enum BurstListError {
    Io(std::io::Error),
    Http(reqwest::Error),
    Status(u16),
    Timeout(std::time::Duration),
    Parse(serde_json::Error),
}

impl fmt::Display for BurstListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read burst list: {err}"),
            Self::Http(err) => write!(f, "failed to fetch burst list: {err}"),
            Self::Status(code) => write!(f, "burst list request returned status {code}"),
            Self::Timeout(limit) => write!(f, "burst list not received within {limit:?}"),
            Self::Parse(err) => write!(f, "malformed burst list: {err}"),
        }
    }
}

impl std::error::Error for BurstListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::Status(_) | Self::Timeout(_) => None,
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BurstListError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<reqwest::Error> for BurstListError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<serde_json::Error> for BurstListError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[derive(Debug)]
pub enum ArchiveDateError {
    Empty,
    Invalid { value: String, source: chrono::ParseError },
}

impl fmt::Display for ArchiveDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no archive date selected"),
            Self::Invalid { value, source } => {
                write!(f, "invalid archive date '{value}': {source}")
            }
        }
    }
}

impl std::error::Error for ArchiveDateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Invalid { source, .. } => Some(source),
        }
    }
}
