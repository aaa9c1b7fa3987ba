pub mod entity;
pub mod repository;

pub use entity::{Article, parse_pub_date};
pub use repository::ArticleRepository;
