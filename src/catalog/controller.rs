use axum::{
    body::HttpBody,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::post,
    BoxError, Router,
};
use serde_json::Value;
use tracing::info;
use crate::catalog::command::add_movie_cmd::AddMovieCommand;
use crate::catalog::command::find_movies_cmd::{FindMoviesCommand, FindMoviesCommandRequest, FindMoviesCommandResponse};
use crate::catalog::dto::{MovieRequest, MovieResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static, B::Data: Send, B::Error: Into<BoxError> {
    Router::new()
        .route("/movies", post(add_movie).get(find_movies))
        .with_state(state)
}

pub(crate) async fn add_movie(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<MovieResponse>), ServerError> {
    let req: MovieRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    info!(stage = %state.config.stage, name = %req.name, "request to create movie");
    let res = AddMovieCommand::new(state.catalog.clone()).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_movies(
    State(state): State<AppState>,
    Query(req): Query<FindMoviesCommandRequest>) -> Result<Json<FindMoviesCommandResponse>, ServerError> {
    info!(stage = %state.config.stage, censure_level = %req.censure_level, page = req.page, size = req.size,
        "request to find movies");
    let res = FindMoviesCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}
