pub mod service;

use async_trait::async_trait;
use crate::core::catalog::{CatalogResult, Classification};
use crate::core::pagination::PageResult;
use crate::movies::dto::MovieDto;

#[async_trait]
pub trait CatalogService: Sync + Send {
    /// Persists a movie whose name is not taken yet and returns it with its new id.
    async fn create_movie(&self, movie: &MovieDto) -> CatalogResult<MovieDto>;

    /// Pages through movies of one classification. `page_number` starts at 1 and
    /// a zero page number or size returns every match as a single page.
    async fn find_movies_by_classification(&self, classification: Classification,
                                           page_number: u32, page_size: u32) -> CatalogResult<PageResult<MovieDto>>;
}
