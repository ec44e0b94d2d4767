use std::sync::Arc;
use async_trait::async_trait;
use validator::Validate;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::{MovieRequest, MovieResponse};
use crate::catalog::transformer;
use crate::core::command::{Command, CommandError};

pub struct AddMovieCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddMovieCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[async_trait]
impl Command<MovieRequest, MovieResponse> for AddMovieCommand {
    async fn execute(&self, req: MovieRequest) -> Result<MovieResponse, CommandError> {
        req.validate()?;
        let movie = transformer::to_movie(Some(&req))?;
        let created = self.catalog_service.create_movie(&movie).await?;
        transformer::to_response(Some(&created)).map_err(CommandError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_movie_cmd::AddMovieCommand;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::movies::fixtures;

    async fn build_command() -> AddMovieCommand {
        let config = Configuration::new("test").with_store(RepositoryStore::InMemory);
        let svc = factory::create_catalog_service(&config).await;
        AddMovieCommand::new(Arc::from(svc))
    }

    #[tokio::test]
    async fn test_should_run_add_movie() {
        let cmd = build_command().await;
        let res = cmd.execute(fixtures::request("Titanic")).await.expect("should add movie");
        assert!(res.id.is_some());
        assert_eq!("Titanic", res.name.as_str());
        assert_eq!(0, res.version);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_movie() {
        let cmd = build_command().await;
        let _ = cmd.execute(fixtures::request("Titanic")).await.expect("should add movie");
        let err = cmd.execute(fixtures::request("Titanic")).await.expect_err("should reject duplicate");
        assert!(matches!(err, CommandError::DuplicateKey { .. }));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_request() {
        let cmd = build_command().await;
        let mut req = fixtures::request("Titanic");
        req.cast = vec![];
        let err = cmd.execute(req).await.expect_err("should reject empty cast");
        assert!(matches!(err, CommandError::Validation { .. }));
        assert!(err.message().contains("Cast must have"));
    }

    #[tokio::test]
    async fn test_should_report_blank_name_and_director() {
        let cmd = build_command().await;
        let mut req = fixtures::request(" ");
        req.director = "".to_string();
        let err = cmd.execute(req).await.expect_err("should reject blank fields");
        assert_eq!("Movie director cannot be blank; Movie name cannot be blank", err.message());
    }
}
