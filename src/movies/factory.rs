use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::movies::repository::ddb_movie_repository::DDBMovieRepository;
use crate::movies::repository::memory_movie_repository::MemoryMovieRepository;
use crate::movies::repository::MovieRepository;
use crate::utils::ddb::{build_db_client, create_table, IndexKeys};

// classification lookups sort by name
pub(crate) fn movie_table_indexes(config: &Configuration) -> Vec<IndexKeys<'_>> {
    vec![
        IndexKeys { index_name: config.index_name.as_str(), hash_key: "classification", range_key: Some("name") },
    ]
}

pub async fn create_movie_repository(config: &Configuration) -> Box<dyn MovieRepository> {
    match config.store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config.store).await;
            Box::new(DDBMovieRepository::new(client, config.table_name.as_str(), config.index_name.as_str()))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config.store).await;
            // the table usually exists already, so a failed create is not fatal
            if let Err(err) = create_table(&client, config.table_name.as_str(), "movie_id",
                                           &movie_table_indexes(config)).await {
                tracing::info!(table = %config.table_name, "skipping table creation: {}", err);
            }
            Box::new(DDBMovieRepository::new(client, config.table_name.as_str(), config.index_name.as_str()))
        }
        RepositoryStore::InMemory => {
            Box::new(MemoryMovieRepository::new())
        }
    }
}
