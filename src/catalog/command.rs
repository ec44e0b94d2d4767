pub mod add_movie_cmd;
pub mod find_movies_cmd;
