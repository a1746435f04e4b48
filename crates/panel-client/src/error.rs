use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// One offending field from a validation rejection (HTTP 422)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors that can occur while talking to the backend API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Backend rejected the credentials or the bearer token (HTTP 401)
    #[error("invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// The endpoint does not exist on the backend (HTTP 404)
    #[error("endpoint not found: {path} {location}")]
    EndpointNotFound {
        path: String,
        location: ErrorLocation,
    },

    /// Payload rejected with field-level details (HTTP 422)
    #[error("validation rejected: {} field(s) {location}", details.len())]
    Validation {
        details: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Could not open a connection to the backend
    #[error("backend unreachable: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
    },

    /// Backend accepted the connection but did not answer in time
    #[error("backend unresponsive: {message} {location}")]
    Unresponsive {
        message: String,
        location: ErrorLocation,
    },

    /// Any other non-success HTTP status
    #[error("unexpected status {status} from {path} {location}")]
    Status {
        status: u16,
        path: String,
        location: ErrorLocation,
    },

    /// Transport or body-decoding failure not covered above
    #[error("HTTP error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Login succeeded over HTTP but no usable identity could be extracted
    #[error("identity resolution failed: {message} {location}")]
    IdentityResolution {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Classify a reqwest error: timeout and connection failures are
    /// distinct categories, everything else stays a generic HTTP error.
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if err.is_timeout() {
            return ClientError::Unresponsive {
                message: err.to_string(),
                location,
            };
        }

        if err.is_connect() {
            return ClientError::Unreachable {
                message: err.to_string(),
                location,
            };
        }

        ClientError::Http {
            message: err.to_string(),
            location,
            source: err,
        }
    }

    /// Create an identity resolution error with location
    #[track_caller]
    pub fn identity<S: Into<String>>(message: S) -> Self {
        ClientError::IdentityResolution {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_endpoint_not_found(&self) -> bool {
        matches!(self, ClientError::EndpointNotFound { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
