use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::MovieResponse;
use crate::catalog::transformer;
use crate::core::catalog::Classification;
use crate::core::command::{Command, CommandError};
use crate::core::pagination::PageResult;

pub struct FindMoviesCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindMoviesCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Missing page or size means everything in one page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMoviesCommandRequest {
    pub censure_level: Classification,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

impl FindMoviesCommandRequest {
    pub fn new(censure_level: Classification, page: u32, size: u32) -> Self {
        Self {
            censure_level,
            page,
            size,
        }
    }
}

pub type FindMoviesCommandResponse = PageResult<MovieResponse>;

#[async_trait]
impl Command<FindMoviesCommandRequest, FindMoviesCommandResponse> for FindMoviesCommand {
    async fn execute(&self, req: FindMoviesCommandRequest) -> Result<FindMoviesCommandResponse, CommandError> {
        let page = self.catalog_service
            .find_movies_by_classification(req.censure_level, req.page, req.size).await?;
        let content = page.content.iter()
            .map(|movie| transformer::to_response(Some(movie)))
            .collect::<Result<Vec<MovieResponse>, _>>()?;
        Ok(PageResult {
            content,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            page_number: page.page_number,
            page_size: page.page_size,
            is_first: page.is_first,
            is_last: page.is_last,
            number_of_elements: page.number_of_elements,
        })
    }
}
