//! Error types for the FPL league hub

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FPL API returned {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Unexpected data structure from FPL API ({resource}): {message}")]
    SchemaMismatch { resource: String, message: String },

    #[error("Match with id {match_id} not found in league data")]
    MatchNotFound { match_id: u64 },

    #[error("League not found: {id}")]
    LeagueNotFound { id: u32 },

    #[error("League {id} already exists")]
    LeagueExists { id: u32 },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("{name} parameter is required")]
    MissingParameter { name: &'static str },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Blocking task failed: {message}")]
    Blocking { message: String },
}

/// Coarse classification used when reporting errors to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UpstreamUnavailable,
    UpstreamSchemaMismatch,
    NotFound,
    Validation,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable name, used as the `error` field of JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::UpstreamSchemaMismatch => "upstream_schema_mismatch",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation_error",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Internal => "internal_error",
        }
    }
}

impl HubError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HubError::Http(_) | HubError::UpstreamStatus { .. } => ErrorKind::UpstreamUnavailable,
            HubError::SchemaMismatch { .. } => ErrorKind::UpstreamSchemaMismatch,
            HubError::MatchNotFound { .. }
            | HubError::LeagueNotFound { .. }
            | HubError::NotFound { .. } => ErrorKind::NotFound,
            HubError::MissingParameter { .. }
            | HubError::InvalidId(_)
            | HubError::InvalidRequest { .. } => ErrorKind::Validation,
            HubError::LeagueExists { .. } => ErrorKind::Conflict,
            HubError::Database(_) | HubError::Blocking { .. } => ErrorKind::Internal,
        }
    }

    pub fn schema(resource: impl Into<String>, message: impl Into<String>) -> Self {
        HubError::SchemaMismatch {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Rewrite an upstream 404 into a [`HubError::NotFound`] for `resource`.
    ///
    /// Used by single-resource passthroughs where a missing upstream record means
    /// the caller asked for something that does not exist.
    pub fn upstream_missing_as(self, resource: &'static str, id: impl ToString) -> Self {
        match self {
            HubError::UpstreamStatus { status: 404, .. } => HubError::NotFound {
                resource,
                id: id.to_string(),
            },
            other => other,
        }
    }
}

impl From<actix_web::error::BlockingError> for HubError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        HubError::Blocking {
            message: err.to_string(),
        }
    }
}
