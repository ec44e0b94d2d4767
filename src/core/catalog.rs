use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CatalogError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Throttled or temporarily unreachable store; the caller may retry with a backoff.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Mapping {
        message: String,
    },
    CreateFailed {
        message: String,
        cause: Box<CatalogError>,
    },
    LookupFailed {
        message: String,
        cause: Box<CatalogError>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> CatalogError {
        CatalogError::DuplicateKey { message: message.to_string() }
    }

    pub fn duplicate_movie(name: &str) -> CatalogError {
        CatalogError::duplicate_key(
            format!("You cant create a new movie with name '{}' because it already exists.", name).as_str())
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn database_or_unavailable(message: &str, reason: Option<String>, retryable: bool) -> CatalogError {
        if retryable {
            CatalogError::unavailable(
                format!("ddb database unavailable error {:?} {:?}", message, reason).as_str(), reason, true)
        } else if let Some(ref reason_val) = reason {
            if reason_val.as_str().contains("404") {
                CatalogError::not_found(
                    format!("not found error {:?} {:?}", message, reason).as_str())
            } else {
                CatalogError::database(
                    format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
            }
        } else {
            CatalogError::database(
                format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
        }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn mapping(message: &str) -> CatalogError {
        CatalogError::Mapping { message: message.to_string() }
    }

    pub fn create_failed(cause: CatalogError) -> CatalogError {
        CatalogError::CreateFailed { message: cause.to_string(), cause: Box::new(cause) }
    }

    pub fn lookup_failed(cause: CatalogError) -> CatalogError {
        CatalogError::LookupFailed { message: cause.to_string(), cause: Box::new(cause) }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Database { retryable, .. } => { *retryable }
            CatalogError::DuplicateKey { .. } => { false }
            CatalogError::NotFound { .. } => { false }
            CatalogError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            CatalogError::Validation { .. } => { false }
            CatalogError::Serialization { .. } => { false }
            CatalogError::Mapping { .. } => { false }
            CatalogError::CreateFailed { cause, .. } => { cause.retryable() }
            CatalogError::LookupFailed { cause, .. } => { cause.retryable() }
            CatalogError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for CatalogError {
    fn from(err: String) -> Self {
        CatalogError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Mapping { message } => {
                write!(f, "{}", message)
            }
            CatalogError::CreateFailed { message, .. } => {
                write!(f, "could not create movie: {}", message)
            }
            CatalogError::LookupFailed { message, .. } => {
                write!(f, "could not find movies: {}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::CreateFailed { cause, .. } => Some(cause.as_ref()),
            CatalogError::LookupFailed { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// A specialized Result type for the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

// Censorship rating of a movie. The serialized names are the ones stored and
// exchanged over the wire; the English names are accepted as input aliases.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "CENSURADO", alias = "RESTRICTED")]
    Restricted,
    #[serde(rename = "SEM_CENSURA", alias = "UNRESTRICTED")]
    Unrestricted,
}

impl FromStr for Classification {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CENSURADO" | "RESTRICTED" => Ok(Classification::Restricted),
            "SEM_CENSURA" | "UNRESTRICTED" => Ok(Classification::Unrestricted),
            other => Err(CatalogError::serialization(
                format!("unknown classification {:?}", other).as_str())),
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Classification::Restricted => write!(f, "CENSURADO"),
            Classification::Unrestricted => write!(f, "SEM_CENSURA"),
        }
    }
}
