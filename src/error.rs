//! Standard errors used by all functions in the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error collecting all possible failures of the PIX client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a PIX API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The request was rejected locally before reaching the bank.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    /// The client certificate could not be loaded.
    #[error("Invalid client certificate: {0}")]
    Certificate(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Other(e.into())
    }
}

/// PIX HTTP APIs error, as described by the "problem details" bodies returned by the banks.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// A unique identifier for this class of error.
    ///
    /// It's typically a URL such as `https://pix.bcb.gov.br/api/v2/error/CobNaoEncontrado`.
    pub r#type: String,
    /// Concise description of the error.
    pub title: String,
    /// Status reported by the server, falling back to the HTTP status of the response.
    pub status: u16,
    /// A human readable explanation specific to this occurrence of the problem.
    pub detail: Option<String>,
    /// List of schema violations, mostly returned alongside validation errors.
    pub violacoes: Vec<Violacao>,
}

/// A single violation reported in an [`ApiError`](crate::error::ApiError).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Violacao {
    /// Why the value was rejected.
    pub razao: Option<String>,
    /// Path of the offending property, e.g. `cob.valor.original`.
    pub propriedade: Option<String>,
    /// The rejected value, as sent back by the bank.
    ///
    /// Banks echo it with its original JSON type, so it is not necessarily a string.
    pub valor: Option<serde_json::Value>,
}

/// Coarse classification of an [`ApiError`](crate::error::ApiError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The authenticated participant is not allowed to perform the request.
    AccessDenied,
    /// The requested resource does not exist.
    NotFound,
    /// The request does not respect the API schema or business rules.
    Validation,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
    /// Any other failure.
    Unknown,
}

impl ApiError {
    /// Classifies this error, looking both at the status and at the error type.
    pub fn kind(&self) -> ApiErrorKind {
        if self.status == 403 || self.r#type.contains("AcessoNegado") {
            ApiErrorKind::AccessDenied
        } else if self.status == 404 || self.r#type.contains("RecursoNaoEncontrado") {
            ApiErrorKind::NotFound
        } else if self.status == 400 || self.r#type.contains("ErroValidacao") {
            ApiErrorKind::Validation
        } else if self.status == 503 {
            ApiErrorKind::ServiceUnavailable
        } else {
            ApiErrorKind::Unknown
        }
    }

    /// Shorthand for `kind() == ApiErrorKind::AccessDenied`.
    pub fn is_access_denied(&self) -> bool {
        self.kind() == ApiErrorKind::AccessDenied
    }

    /// Shorthand for `kind() == ApiErrorKind::NotFound`.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ApiErrorKind::NotFound
    }

    /// Shorthand for `kind() == ApiErrorKind::Validation`.
    pub fn is_validation(&self) -> bool {
        self.kind() == ApiErrorKind::Validation
    }

    /// Shorthand for `kind() == ApiErrorKind::ServiceUnavailable`.
    pub fn is_service_unavailable(&self) -> bool {
        self.kind() == ApiErrorKind::ServiceUnavailable
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PIX HTTP error {}: {} ({})",
            self.status, self.title, self.r#type
        )?;

        if let Some(ref detail) = self.detail {
            write!(f, "\nAdditional details: {}", detail)?;
        }

        if !self.violacoes.is_empty() {
            write!(f, "\nViolations:")?;
            for violacao in &self.violacoes {
                write!(
                    f,
                    "\n- {}: {}",
                    violacao.propriedade.as_deref().unwrap_or("-"),
                    violacao.razao.as_deref().unwrap_or("-")
                )?;
            }
        }

        Ok(())
    }
}
