use chrono::NaiveDate;
use crate::catalog::dto::MovieRequest;
use crate::core::catalog::Classification;
use crate::movies::dto::MovieDto;

pub(crate) fn launch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 3).expect("valid launch date")
}

pub(crate) fn movie(name: &str, classification: Classification) -> MovieDto {
    MovieDto::new(name, launch_date(), classification, "Movie Director",
                  vec!["Leonardo di Caprio".to_string(), "Kate Winslet".to_string()])
}

pub(crate) fn titanic() -> MovieDto {
    movie("Titanic", Classification::Unrestricted)
}

pub(crate) fn request(name: &str) -> MovieRequest {
    MovieRequest {
        name: name.to_string(),
        launch_date: launch_date(),
        censure_level: Classification::Restricted,
        director: "Movie Director".to_string(),
        cast: vec!["Leonardo di Caprio".to_string(), "Kate Winslet".to_string()],
    }
}
