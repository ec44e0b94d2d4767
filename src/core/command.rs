use async_trait::async_trait;
use validator::ValidationErrors;
use crate::core::catalog::CatalogError;

#[derive(Debug)]
pub enum CommandError {
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
    CreateFailed {
        message: String,
    },
    LookupFailed {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Database { message, .. } => message,
            CommandError::DuplicateKey { message } => message,
            CommandError::NotFound { message } => message,
            CommandError::CreateFailed { message } => message,
            CommandError::LookupFailed { message } => message,
            CommandError::Runtime { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message, .. } => message,
        }
    }
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            CatalogError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            CatalogError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CatalogError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CatalogError::Mapping { message } => {
                CommandError::Serialization { message }
            }
            CatalogError::CreateFailed { message, .. } => {
                CommandError::CreateFailed { message }
            }
            CatalogError::LookupFailed { message, .. } => {
                CommandError::LookupFailed { message }
            }
            CatalogError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

impl From<ValidationErrors> for CommandError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors.field_errors().iter()
            .flat_map(|(field, errs)| errs.iter().map(move |e| {
                match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                }
            }))
            .collect();
        messages.sort();
        CommandError::Validation { message: messages.join("; "), reason_code: Some("400".to_string()) }
    }
}
