use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::catalog::Classification;
use crate::core::domain::Identifiable;
use crate::utils::date::{date_serializer, serializer};

// MovieEntity is the document persisted in the movie store. The id stays empty
// until the store assigns one on creation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MovieEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<String>,
    pub version: i64,
    pub name: String,
    #[serde(with = "date_serializer")]
    pub launch_date: NaiveDate,
    pub classification: Classification,
    pub director: String,
    pub cast: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl MovieEntity {
    pub fn new(name: &str, launch_date: NaiveDate, classification: Classification,
               director: &str, cast: &[&str]) -> Self {
        Self {
            movie_id: None,
            version: 0,
            name: name.to_string(),
            launch_date,
            classification,
            director: director.to_string(),
            cast: cast.iter().map(|c| c.to_string()).collect(),
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for MovieEntity {
    fn id(&self) -> Option<String> {
        self.movie_id.clone()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
