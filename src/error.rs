// src/error.rs
use std::num::ParseIntError;

use crate::core::Response;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to build the site's public key from its hex components.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("invalid modulus")]
    InvalidModulus,
    #[error(transparent)]
    InvalidExponent(#[from] ParseIntError),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("{0}")]
    Encryption(String),

    #[error("{0}")]
    Transport(#[source] BoxError),

    #[error("invalid config: {0}")]
    Config(#[from] envconfig::Error),

    /// The site rejected the card number / PIN. Carries the site's own text.
    #[error("{message}")]
    Authentication { message: String, response: Response },

    /// The site rendered its generic error page.
    #[error("internal server error")]
    Application { response: Response },

    /// Non-2xx status with no recognizable page content.
    #[error("unexpected HTTP status {}", .response.status)]
    Status { response: Response },
}

impl Error {
    pub fn transport<E>(e: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Transport(e.into())
    }

    /// The HTTP exchange behind this error, if one happened.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Authentication { response, .. }
            | Error::Application { response }
            | Error::Status { response } => Some(response),
            _ => None,
        }
    }

    /// Status to report for this error; 0 when no exchange happened.
    pub fn status(&self) -> u16 {
        self.response().map(|r| r.status).unwrap_or(0)
    }
}
