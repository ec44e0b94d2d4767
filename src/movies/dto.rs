use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::core::catalog::Classification;
use crate::core::domain::Identifiable;
use crate::movies::domain::model::MovieEntity;
use crate::utils::date::date_serializer;

// MovieDto is a data transfer object for the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub movie_id: Option<String>,
    pub version: i64,
    pub name: String,
    #[serde(with = "date_serializer")]
    pub launch_date: NaiveDate,
    pub classification: Classification,
    pub director: String,
    pub cast: Vec<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl MovieDto {
    pub fn new(name: &str, launch_date: NaiveDate, classification: Classification,
               director: &str, cast: Vec<String>) -> MovieDto {
        MovieDto {
            movie_id: None,
            version: 0,
            name: name.to_string(),
            launch_date,
            classification,
            director: director.to_string(),
            cast,
            created_at: None,
        }
    }
}

impl Identifiable for MovieDto {
    fn id(&self) -> Option<String> {
        self.movie_id.clone()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&MovieEntity> for MovieDto {
    fn from(other: &MovieEntity) -> Self {
        Self {
            movie_id: other.movie_id.clone(),
            version: other.version,
            name: other.name.to_string(),
            launch_date: other.launch_date,
            classification: other.classification,
            director: other.director.to_string(),
            cast: other.cast.clone(),
            created_at: Some(other.created_at),
        }
    }
}

impl From<&MovieDto> for MovieEntity {
    fn from(other: &MovieDto) -> Self {
        let mut entity = MovieEntity::new(other.name.as_str(), other.launch_date, other.classification,
                                          other.director.as_str(), &[]);
        entity.movie_id = other.movie_id.clone();
        entity.version = other.version;
        entity.cast = other.cast.clone();
        if let Some(created_at) = other.created_at {
            entity.created_at = created_at;
        }
        entity
    }
}

#[cfg(test)]
mod tests {
    use crate::core::catalog::Classification;
    use crate::movies::domain::model::MovieEntity;
    use crate::movies::dto::MovieDto;
    use crate::movies::fixtures;

    #[tokio::test]
    async fn test_should_build_movie_dto() {
        let movie = fixtures::movie("Titanic", Classification::Unrestricted);
        assert_eq!("Titanic", movie.name.as_str());
        assert_eq!(None, movie.movie_id);
        assert_eq!(None, movie.created_at);
        assert_eq!(2, movie.cast.len());
    }

    #[tokio::test]
    async fn test_should_convert_between_dto_and_entity() {
        let mut movie = fixtures::movie("Titanic", Classification::Restricted);
        movie.movie_id = Some("5e2cc9e6ec7aef3c7d38a84c".to_string());
        let entity = MovieEntity::from(&movie);
        assert_eq!(movie.movie_id, entity.movie_id);
        assert_eq!(movie.cast, entity.cast);
        let back = MovieDto::from(&entity);
        assert_eq!(movie.name, back.name);
        assert_eq!(movie.classification, back.classification);
        assert_eq!(Some(entity.created_at), back.created_at);
    }
}
