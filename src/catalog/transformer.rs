use crate::catalog::dto::{MovieRequest, MovieResponse};
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::movies::dto::MovieDto;

pub fn to_movie(req: Option<&MovieRequest>) -> CatalogResult<MovieDto> {
    let req = req.ok_or_else(|| CatalogError::mapping("Error transforming movie request into movie"))?;
    Ok(MovieDto::new(req.name.as_str(), req.launch_date, req.censure_level,
                     req.director.as_str(), req.cast.clone()))
}

pub fn to_response(movie: Option<&MovieDto>) -> CatalogResult<MovieResponse> {
    let movie = movie.ok_or_else(|| CatalogError::mapping("Error transforming movie into movie response"))?;
    Ok(MovieResponse {
        id: movie.movie_id.clone(),
        name: movie.name.clone(),
        launch_date: movie.launch_date,
        censure_level: movie.classification,
        director: movie.director.clone(),
        cast: movie.cast.clone(),
        version: movie.version,
    })
}
