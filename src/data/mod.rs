pub mod post_repository;
pub mod repositories;
pub mod user_repository;
