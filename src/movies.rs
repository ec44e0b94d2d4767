pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

#[cfg(test)]
pub(crate) mod fixtures;
