use std::{cmp, sync::Arc};

use async_trait::async_trait;
use catalog_request::ordering::Ordering;
use itertools::Itertools;
use tokio::sync::RwLock;

use crate::{
    author::repository::{AuthorRecord, AuthorRepository},
    error::AppResult,
};

/// In-memory implementation of the author repository.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    authors: Arc<RwLock<Vec<AuthorRecord>>>,
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self {
            authors: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a new memory repository with initial data.
    pub fn with_data(authors: Vec<AuthorRecord>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(authors)),
        }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn select_all(&self, ordering: &Ordering) -> AppResult<Vec<AuthorRecord>> {
        ordering.validate(&AuthorRecord::get_schema())?;

        let authors = self.authors.read().await;
        Ok(authors
            .iter()
            .sorted_by(|a, b| ordering.evaluate(*a, *b).unwrap_or(cmp::Ordering::Equal))
            .cloned()
            .collect())
    }
}
