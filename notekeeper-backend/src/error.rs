use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use notekeeper_types::{ErrorResponse, NoteId};
use strum::Display;
use thiserror::Error;

/// Note fields subject to presence checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoteField {
    Title,
    Content,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("Note {0} is required")]
    Validation(NoteField),
    #[error("Note not found")]
    NotFound(NoteId),
}

impl ResponseError for NoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            NoteError::Validation(_) => StatusCode::BAD_REQUEST,
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be one of sequential, count; got {value:?}")]
    InvalidIdStrategy { var: &'static str, value: String },
}

impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    }
}
