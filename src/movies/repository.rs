pub mod ddb_movie_repository;
pub mod memory_movie_repository;

use async_trait::async_trait;
use crate::core::catalog::{CatalogResult, Classification};
use crate::core::pagination::{PageResult, PageSpec};
use crate::core::repository::Repository;
use crate::movies::domain::model::MovieEntity;

#[async_trait]
pub trait MovieRepository: Repository<MovieEntity> {
    // exact, case-sensitive match on the movie name
    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool>;

    // movies with the given classification, in the store's stable order
    async fn find_by_classification(&self, classification: Classification,
                                    spec: &PageSpec) -> CatalogResult<PageResult<MovieEntity>>;
}
