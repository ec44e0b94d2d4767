use async_trait::async_trait;
use tracing::{error, info};
use crate::catalog::domain::CatalogService;
use crate::core::catalog::{CatalogError, CatalogResult, Classification};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::pagination::{PageResult, PageSpec};
use crate::movies::domain::model::MovieEntity;
use crate::movies::dto::MovieDto;
use crate::movies::repository::MovieRepository;

pub struct CatalogServiceImpl {
    movie_repository: Box<dyn MovieRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, movie_repository: Box<dyn MovieRepository>) -> Self {
        Self {
            movie_repository,
        }
    }
}

// The name check and the save are two separate store calls, so two concurrent
// creates for the same name can both pass the check.
#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn create_movie(&self, movie: &MovieDto) -> CatalogResult<MovieDto> {
        info!(name = %movie.name, "trying to create a new movie");
        if movie.name.trim().is_empty() {
            return Err(CatalogError::validation("Movie name cannot be blank", None));
        }

        let exists = self.movie_repository.exists_by_name(movie.name.as_str()).await.map_err(|err| {
            error!(name = %movie.name, error = %err, "unexpected error checking movie name");
            CatalogError::create_failed(err)
        })?;
        if exists {
            let err = CatalogError::duplicate_movie(movie.name.as_str());
            error!(name = %movie.name, "{}", err);
            return Err(err);
        }

        let mut candidate = MovieEntity::from(movie);
        candidate.movie_id = None;
        let saved = self.movie_repository.create(&candidate).await.map_err(|err| {
            error!(name = %movie.name, error = %err, "unexpected error creating the movie");
            CatalogError::create_failed(err)
        })?;
        info!(name = %saved.name, id = ?saved.id(), "movie created");
        Ok(MovieDto::from(&saved))
    }

    async fn find_movies_by_classification(&self, classification: Classification,
                                           page_number: u32, page_size: u32) -> CatalogResult<PageResult<MovieDto>> {
        info!(%classification, page_number, page_size, "trying to find all movies by censure level");
        let spec = PageSpec::normalize(page_number, page_size);
        self.movie_repository.find_by_classification(classification, &spec).await
            .map(|page| page.map(|m| MovieDto::from(&m)))
            .map_err(|err| {
                error!(%classification, error = %err, "unexpected error finding movies by censure level");
                CatalogError::lookup_failed(err)
            })
    }
}
