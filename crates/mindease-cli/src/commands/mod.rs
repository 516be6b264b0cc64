pub mod assess;
pub mod config;
pub mod insight;
pub mod schema;
pub mod score;
