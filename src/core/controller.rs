use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

// Duplicates keep their message verbatim; store failures get a stable prefix.
impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::CreateFailed { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Error creating the movie: {}", message))
            }
            CommandError::LookupFailed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error finding all movies".to_string())
            }
            CommandError::Database { .. } | CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, message) = ServerError::from(CommandError::DuplicateKey { message: "dup 'Titanic'".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("dup 'Titanic'", message.as_str());

        let (status, message) = ServerError::from(CommandError::CreateFailed { message: "down".to_string() });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert!(message.starts_with("Error creating the movie"));

        let (status, message) = ServerError::from(CommandError::LookupFailed { message: "down".to_string() });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!("Error finding all movies", message.as_str());

        let (status, _) = ServerError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let (status, _) = ServerError::from(CommandError::NotFound { message: "none".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
    }
}
