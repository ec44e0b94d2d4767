pub mod catalog;
pub mod core;
pub mod movies;
pub mod utils;
