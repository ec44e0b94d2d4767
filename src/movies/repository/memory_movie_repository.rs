use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use crate::core::catalog::{CatalogError, CatalogResult, Classification};
use crate::core::pagination::{PageResult, PageSpec};
use crate::core::repository::Repository;
use crate::movies::domain::model::MovieEntity;
use crate::movies::repository::MovieRepository;

// In-process movie store keeping documents in insertion order. Clones share the
// same documents.
#[derive(Debug, Default, Clone)]
pub struct MemoryMovieRepository {
    movies: Arc<RwLock<Vec<MovieEntity>>>,
}

impl MemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Vec<MovieEntity>>> {
        self.movies.read().map_err(|err| CatalogError::runtime(
            format!("movie store lock poisoned {}", err).as_str(), None))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Vec<MovieEntity>>> {
        self.movies.write().map_err(|err| CatalogError::runtime(
            format!("movie store lock poisoned {}", err).as_str(), None))
    }
}

#[async_trait]
impl Repository<MovieEntity> for MemoryMovieRepository {
    async fn create(&self, entity: &MovieEntity) -> CatalogResult<MovieEntity> {
        let mut movies = self.write()?;
        if let Some(id) = &entity.movie_id {
            if movies.iter().any(|m| m.movie_id.as_ref() == Some(id)) {
                return Err(CatalogError::duplicate_key(format!("movie {} already exists", id).as_str()));
            }
        }
        let mut saved = entity.clone();
        saved.movie_id = Some(entity.movie_id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()));
        saved.version = 0;
        saved.created_at = Utc::now().naive_utc();
        movies.push(saved.clone());
        Ok(saved)
    }

    async fn get(&self, id: &str) -> CatalogResult<MovieEntity> {
        self.read()?.iter()
            .find(|m| m.movie_id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| CatalogError::not_found(format!("movie not found for {}", id).as_str()))
    }
}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool> {
        Ok(self.read()?.iter().any(|m| m.name == name))
    }

    async fn find_by_classification(&self, classification: Classification,
                                    spec: &PageSpec) -> CatalogResult<PageResult<MovieEntity>> {
        let records = self.read()?.iter()
            .filter(|m| m.classification == classification)
            .cloned()
            .collect();
        Ok(PageResult::from_records(records, spec))
    }
}
