use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::movies::factory;

pub async fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let movie_repo = factory::create_movie_repository(config).await;
    Box::new(CatalogServiceImpl::new(config, movie_repo))
}
