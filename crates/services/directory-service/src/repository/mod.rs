//! Repository layer for data access.

mod entity;
mod table_repository;

pub use entity::DirectoryEntity;
pub use table_repository::{DirectoryRepository, TableStore};
