use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::core::catalog::Classification;
use crate::utils::date::date_serializer;

// Payload accepted when registering a movie.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[validate(custom(function = "not_blank", message = "Movie name cannot be blank"))]
    pub name: String,
    #[serde(with = "date_serializer")]
    pub launch_date: NaiveDate,
    pub censure_level: Classification,
    #[validate(custom(function = "not_blank", message = "Movie director cannot be blank"))]
    pub director: String,
    #[validate(length(min = 1, max = 10, message = "Cast must have at least 1 and at most 10 actors."))]
    pub cast: Vec<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: Option<String>,
    pub name: String,
    #[serde(with = "date_serializer")]
    pub launch_date: NaiveDate,
    pub censure_level: Classification,
    pub director: String,
    pub cast: Vec<String>,
    pub version: i64,
}

#[cfg(test)]
mod tests {
    use validator::Validate;
    use crate::catalog::dto::MovieRequest;
    use crate::movies::fixtures;

    #[tokio::test]
    async fn test_should_parse_camel_case_request() {
        let json = r#"{"name":"Titanic","launchDate":"2012-04-03","censureLevel":"CENSURADO",
                       "director":"James Cameron","cast":["Leonardo di Caprio"]}"#;
        let req: MovieRequest = serde_json::from_str(json).expect("should parse request");
        assert_eq!("Titanic", req.name.as_str());
        assert_eq!(fixtures::launch_date(), req.launch_date);
        assert!(req.validate().is_ok());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_censure_level() {
        let json = r#"{"name":"Titanic","launchDate":"2012-04-03","censureLevel":"LIVRE",
                       "director":"James Cameron","cast":["Leonardo di Caprio"]}"#;
        assert!(serde_json::from_str::<MovieRequest>(json).is_err());
    }

    #[tokio::test]
    async fn test_should_validate_blank_fields() {
        let mut req = fixtures::request(" ");
        req.director = "".to_string();
        let errors = req.validate().expect_err("should reject blank fields");
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("director"));
    }

    #[tokio::test]
    async fn test_should_validate_cast_size() {
        let mut req = fixtures::request("Titanic");
        req.cast = vec![];
        assert!(req.validate().is_err());

        req.cast = (0..11).map(|i| format!("actor {}", i)).collect();
        assert!(req.validate().is_err());

        req.cast.truncate(10);
        assert!(req.validate().is_ok());
    }
}
