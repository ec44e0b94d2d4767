use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::transact_write_items::TransactWriteItemsError;
use aws_sdk_dynamodb::types::{AttributeValue, CancellationReason, Put, TransactWriteItem};
use chrono::Utc;
use uuid::Uuid;

use crate::core::catalog::{CatalogError, CatalogResult, Classification};
use crate::core::pagination::{PageResult, PageSpec};
use crate::core::repository::Repository;
use crate::movies::domain::model::MovieEntity;
use crate::movies::repository::MovieRepository;
use crate::utils::ddb::{parse_date_attribute, parse_date_time_attribute, parse_item, parse_number_attribute, parse_string_attribute, parse_string_list_attribute};

const QUERY_PAGE_LIMIT: i32 = 500;
const NAME_GUARD_PREFIX: &str = "name#";
const CONDITIONAL_CHECK_FAILED: &str = "ConditionalCheckFailed";

// Movies share the table with one guard item per name, keyed `name#<name>`.
// Guard items carry no classification, so the classification index skips them.
#[derive(Debug)]
pub struct DDBMovieRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBMovieRepository {
    pub fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    // Collects every movie of a classification, following last_evaluated_key
    // until the index is exhausted. The index is sorted by name.
    async fn query_all(&self, classification: Classification) -> CatalogResult<Vec<MovieEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let index_name: &str = self.index_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .query()
                .table_name(table_name)
                .index_name(index_name)
                .limit(QUERY_PAGE_LIMIT)
                .consistent_read(false)
                .set_exclusive_start_key(exclusive_start_key.take())
                .key_condition_expression("classification = :classification")
                .expression_attribute_values(":classification", AttributeValue::S(classification.to_string()))
                .send()
                .await.map_err(CatalogError::from)?;
            for item in res.items().unwrap_or_default() {
                records.push(map_to_movie(item)?);
            }
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl Repository<MovieEntity> for DDBMovieRepository {
    // The movie and its name guard are written in one transaction, each under
    // attribute_not_exists(movie_id).
    async fn create(&self, entity: &MovieEntity) -> CatalogResult<MovieEntity> {
        let table_name: &str = self.table_name.as_ref();
        let mut saved = entity.clone();
        let movie_id = entity.movie_id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
        saved.movie_id = Some(movie_id.clone());
        saved.version = 0;
        saved.created_at = Utc::now().naive_utc();
        let val = serde_json::to_value(&saved)?;
        let movie_put = Put::builder()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(movie_id)")
            .set_item(Some(parse_item(val)?))
            .build();
        let guard_put = Put::builder()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(movie_id)")
            .set_item(Some(name_guard_item(saved.name.as_str(), movie_id.as_str())))
            .build();
        let res = self.client
            .transact_write_items()
            .transact_items(TransactWriteItem::builder().put(movie_put).build())
            .transact_items(TransactWriteItem::builder().put(guard_put).build())
            .send()
            .await;
        match res {
            Ok(_) => Ok(saved),
            Err(err) => Err(transact_write_error(saved.name.as_str(), err)),
        }
    }

    async fn get(&self, id: &str) -> CatalogResult<MovieEntity> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .get_item()
            .table_name(table_name)
            .key("movie_id", AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await.map_err(CatalogError::from)?;
        match res.item() {
            Some(map) => map_to_movie(map),
            None => Err(CatalogError::not_found(format!("movie not found for {}", id).as_str())),
        }
    }
}

#[async_trait]
impl MovieRepository for DDBMovieRepository {
    // strongly consistent read of the name guard, so a create is visible to the next check
    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .get_item()
            .table_name(table_name)
            .key("movie_id", AttributeValue::S(name_guard_key(name)))
            .consistent_read(true)
            .send()
            .await.map_err(CatalogError::from)?;
        Ok(res.item().is_some())
    }

    async fn find_by_classification(&self, classification: Classification,
                                    spec: &PageSpec) -> CatalogResult<PageResult<MovieEntity>> {
        let records = self.query_all(classification).await?;
        Ok(PageResult::from_records(records, spec))
    }
}

fn name_guard_key(name: &str) -> String {
    format!("{}{}", NAME_GUARD_PREFIX, name)
}

fn name_guard_item(name: &str, movie_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("movie_id".to_string(), AttributeValue::S(name_guard_key(name))),
        ("guarded_movie_id".to_string(), AttributeValue::S(movie_id.to_string())),
    ])
}

fn transact_write_error(name: &str, err: SdkError<TransactWriteItemsError>) -> CatalogError {
    if let SdkError::ServiceError(ctx) = &err {
        if let TransactWriteItemsError::TransactionCanceledException(ex) = ctx.err() {
            if let Some(dup) = cancelled_write_error(name, ex.cancellation_reasons().unwrap_or_default()) {
                return dup;
            }
        }
    }
    CatalogError::from(err)
}

// Reasons come back in item order: the movie first, then its name guard.
fn cancelled_write_error(name: &str, reasons: &[CancellationReason]) -> Option<CatalogError> {
    let failed = |i: usize| reasons.get(i).and_then(|r| r.code()) == Some(CONDITIONAL_CHECK_FAILED);
    if failed(1) {
        Some(CatalogError::duplicate_movie(name))
    } else if failed(0) {
        Some(CatalogError::duplicate_key("movie id already exists"))
    } else {
        None
    }
}

fn map_to_movie(map: &HashMap<String, AttributeValue>) -> CatalogResult<MovieEntity> {
    let missing = |attribute: &str| {
        CatalogError::serialization(format!("movie without {} {:?}", attribute, map.get("movie_id")).as_str())
    };
    let classification = parse_string_attribute("classification", map)
        .ok_or_else(|| missing("classification"))?
        .parse::<Classification>()?;
    Ok(MovieEntity {
        movie_id: parse_string_attribute("movie_id", map),
        version: parse_number_attribute("version", map),
        name: parse_string_attribute("name", map).ok_or_else(|| missing("name"))?,
        launch_date: parse_date_attribute("launch_date", map).ok_or_else(|| missing("launch_date"))?,
        classification,
        director: parse_string_attribute("director", map).ok_or_else(|| missing("director"))?,
        cast: parse_string_list_attribute("cast", map),
        created_at: parse_date_time_attribute("created_at", map).ok_or_else(|| missing("created_at"))?,
    })
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::Client;
    use aws_sdk_dynamodb::types::{AttributeValue, CancellationReason};
    use crate::core::catalog::{CatalogError, Classification};
    use crate::core::domain::Configuration;
    use crate::core::pagination::PageSpec;
    use crate::core::repository::{Repository, RepositoryStore};
    use crate::movies::domain::model::MovieEntity;
    use crate::movies::fixtures;
    use crate::movies::repository::ddb_movie_repository::{cancelled_write_error, map_to_movie, name_guard_item, DDBMovieRepository};
    use crate::movies::repository::MovieRepository;
    use crate::movies::factory::movie_table_indexes;
    use crate::utils::ddb::{build_db_client, create_table, delete_table, parse_item};

    async fn local_repository(table_name: &str) -> DDBMovieRepository {
        let config = Configuration::new("test");
        let client: Client = build_db_client(RepositoryStore::LocalDynamoDB).await;
        let _ = delete_table(&client, table_name).await;
        let _ = create_table(&client, table_name, "movie_id", &movie_table_indexes(&config)).await;
        DDBMovieRepository::new(client, table_name, config.index_name.as_str())
    }

    fn reason(code: &str) -> CancellationReason {
        CancellationReason::builder().code(code).build()
    }

    #[tokio::test]
    async fn test_should_map_document_to_movie() {
        let mut movie = MovieEntity::from(&fixtures::titanic());
        movie.movie_id = Some("5e2cc9e6ec7aef3c7d38a84c".to_string());
        let item = parse_item(serde_json::to_value(&movie).expect("serialize")).expect("should parse item");
        let mapped = map_to_movie(&item).expect("should map movie");
        assert_eq!(movie, mapped);
    }

    #[tokio::test]
    async fn test_should_reject_document_with_unknown_classification() {
        let mut value = serde_json::to_value(MovieEntity::from(&fixtures::titanic())).expect("serialize");
        value["classification"] = serde_json::Value::String("LIVRE".to_string());
        let item = parse_item(value).expect("should parse item");
        assert!(map_to_movie(&item).is_err());
    }

    #[tokio::test]
    async fn test_should_reject_document_missing_required_attributes() {
        let movie = MovieEntity::from(&fixtures::titanic());
        for attribute in ["name", "director", "created_at", "launch_date", "classification"] {
            let mut item = parse_item(serde_json::to_value(&movie).expect("serialize")).expect("should parse item");
            item.remove(attribute);
            let err = map_to_movie(&item).expect_err("should reject incomplete document");
            assert!(matches!(err, CatalogError::Serialization { .. }), "{}", attribute);
            assert!(err.to_string().contains(attribute));
        }
    }

    #[tokio::test]
    async fn test_should_key_name_guard_by_name() {
        let item = name_guard_item("Titanic", "abc");
        assert_eq!(Some(&AttributeValue::S("name#Titanic".to_string())), item.get("movie_id"));
        assert_eq!(Some(&AttributeValue::S("abc".to_string())), item.get("guarded_movie_id"));
        assert!(item.get("classification").is_none());
    }

    #[tokio::test]
    async fn test_should_map_cancelled_write_to_duplicate() {
        let dup = cancelled_write_error("Titanic", &[reason("None"), reason("ConditionalCheckFailed")])
            .expect("should detect taken name");
        assert!(matches!(dup, CatalogError::DuplicateKey { .. }));
        assert!(dup.to_string().contains("'Titanic'"));

        let dup = cancelled_write_error("Titanic", &[reason("ConditionalCheckFailed"), reason("None")])
            .expect("should detect taken id");
        assert!(matches!(dup, CatalogError::DuplicateKey { .. }));

        assert!(cancelled_write_error("Titanic", &[reason("ThrottlingError"), reason("None")]).is_none());
        assert!(cancelled_write_error("Titanic", &[]).is_none());
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_create_get_movies() {
        let movies_repo = local_repository("movies_create_test").await;
        let saved = movies_repo.create(&MovieEntity::from(&fixtures::titanic())).await.expect("should create movie");
        let id = saved.movie_id.clone().expect("should assign id");
        let loaded = movies_repo.get(id.as_str()).await.expect("should return movie");
        assert_eq!(saved.name, loaded.name);
        assert!(movies_repo.exists_by_name("Titanic").await.expect("should check name"));
        assert!(!movies_repo.exists_by_name("titanic").await.expect("should check name"));
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_see_name_right_after_create() {
        let movies_repo = local_repository("movies_name_guard_test").await;
        for i in 0..5 {
            let name = format!("movie_{}", i);
            assert!(!movies_repo.exists_by_name(name.as_str()).await.expect("should check name"));
            let movie = fixtures::movie(name.as_str(), Classification::Restricted);
            let _ = movies_repo.create(&MovieEntity::from(&movie)).await.expect("should create movie");
            assert!(movies_repo.exists_by_name(name.as_str()).await.expect("should check name"));
        }

        let err = movies_repo.create(&MovieEntity::from(&fixtures::movie("movie_0", Classification::Unrestricted)))
            .await.expect_err("should reject taken name");
        assert!(matches!(err, CatalogError::DuplicateKey { .. }));

        let all = movies_repo.find_by_classification(Classification::Restricted, &PageSpec::Unpaged)
            .await.expect("should return movies");
        assert_eq!(5, all.total_elements);
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_query_movies_by_classification() {
        let movies_repo = local_repository("movies_query_test").await;
        for i in 0..12 {
            let movie = fixtures::movie(format!("movie_{:02}", i).as_str(), Classification::Restricted);
            let _ = movies_repo.create(&MovieEntity::from(&movie)).await.expect("should create movie");
        }
        let all = movies_repo.find_by_classification(Classification::Restricted, &PageSpec::Unpaged)
            .await.expect("should return movies");
        assert_eq!(12, all.content.len());
        assert_eq!("movie_00", all.content[0].name.as_str());

        let page = movies_repo.find_by_classification(Classification::Restricted, &PageSpec::normalize(3, 5))
            .await.expect("should return movies");
        assert_eq!(2, page.content.len());
        assert_eq!(3, page.total_pages);
        assert!(page.is_last);

        let none = movies_repo.find_by_classification(Classification::Unrestricted, &PageSpec::Unpaged)
            .await.expect("should return movies");
        assert_eq!(0, none.total_elements);
    }
}
