pub mod author;
pub mod config;
pub mod error;
pub mod server;
pub mod tracing;

#[cfg(test)]
mod testing;

use author::{
    adapter::AuthorAdapter, query_manager::AuthorQueryManager,
    repository::memory::MemoryAuthorRepository,
};
use config::DatabaseConfig;
use std::sync::Arc;

/// Wires the author adapter over a store seeded from `database`.
pub fn create_author_adapter(database: &DatabaseConfig) -> AuthorAdapter {
    let author_repository = match database {
        DatabaseConfig::Memory(memory) => {
            Arc::new(MemoryAuthorRepository::with_data(memory.authors.clone()))
        }
    };
    let author_query_manager = AuthorQueryManager::new(author_repository);

    AuthorAdapter::new(Arc::new(author_query_manager))
}
