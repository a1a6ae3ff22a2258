pub mod app;
pub mod outbound;
pub mod repository;

pub use app::{Server, ServerError};
