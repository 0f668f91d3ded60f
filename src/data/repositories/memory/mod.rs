pub mod post_repository;
pub mod user_repository;

pub use post_repository::InMemoryPostRepository;
pub use user_repository::InMemoryUserRepository;
