use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use catalog_common::date_time::UtcDateTime;
use catalog_request::ordering::{Ordering, OrderingTerm};
use tracing::error;

use crate::{
    author::repository::{AuthorRecord, AuthorRepositoryArc},
    error::AppResult,
};

/// Produces the display lines of the author list.
#[async_trait]
pub trait AuthorListSource: Debug {
    async fn author_list(&self) -> AppResult<Vec<String>>;
}

pub type AuthorListSourceArc = Arc<dyn AuthorListSource + Send + Sync>;

/// Reads authors sorted by family name and formats them for display.
#[derive(Debug)]
pub struct AuthorQueryManager {
    author_repository: AuthorRepositoryArc,
    ordering: Ordering,
}

impl AuthorQueryManager {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        AuthorQueryManager {
            author_repository,
            ordering: Ordering::new(vec![OrderingTerm::ascending("family_name")]),
        }
    }

    /// Formatted author lines, in the order the repository returned them.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails.
    pub async fn try_get_author_list(&self) -> AppResult<Vec<String>> {
        let authors = self.author_repository.select_all(&self.ordering).await?;
        Ok(authors.iter().map(format_author_line).collect())
    }

    /// Like [`Self::try_get_author_list`], but logs a failure and returns an
    /// empty list instead.
    #[tracing::instrument(skip(self))]
    pub async fn get_author_list(&self) -> Vec<String> {
        match self.try_get_author_list().await {
            Ok(authors) => authors,
            Err(err) => {
                error!(error.kind = err.kind(), error = %err, "Error fetching authors");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl AuthorListSource for AuthorQueryManager {
    async fn author_list(&self) -> AppResult<Vec<String>> {
        Ok(self.get_author_list().await)
    }
}

/// Formats an author as `"<family_name>, <first_name> : <birth_year> - <death_year>"`.
///
/// Without a first name the whole name part is left out. Unknown dates
/// leave their year empty.
pub fn format_author_line(author: &AuthorRecord) -> String {
    let name = if author.first_name.is_empty() {
        String::new()
    } else {
        format!("{}, {}", author.family_name, author.first_name)
    };
    format!(
        "{name} : {} - {}",
        format_year(author.date_of_birth),
        format_year(author.date_of_death)
    )
}

fn format_year(date: Option<UtcDateTime>) -> String {
    date.map(|date| date.year().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        author::repository::{AuthorRepository, memory::MemoryAuthorRepository},
        error::AppError,
        testing::{ErrorEvents, event_fields},
    };

    use super::*;

    /// Returns its authors as they are, recording the requested orderings.
    #[derive(Debug, Default)]
    struct FixedAuthorRepository {
        authors: Vec<AuthorRecord>,
        orderings: Mutex<Vec<Ordering>>,
    }

    #[async_trait]
    impl AuthorRepository for FixedAuthorRepository {
        async fn select_all(&self, ordering: &Ordering) -> AppResult<Vec<AuthorRecord>> {
            self.orderings.lock().unwrap().push(ordering.clone());
            Ok(self.authors.clone())
        }
    }

    #[derive(Debug)]
    struct FailingAuthorRepository;

    #[async_trait]
    impl AuthorRepository for FailingAuthorRepository {
        async fn select_all(&self, _ordering: &Ordering) -> AppResult<Vec<AuthorRecord>> {
            Err(AppError::Internal("Database error".into()))
        }
    }

    fn author(
        first_name: &str,
        family_name: &str,
        date_of_birth: Option<&str>,
        date_of_death: Option<&str>,
    ) -> AuthorRecord {
        AuthorRecord {
            first_name: first_name.into(),
            family_name: family_name.into(),
            date_of_birth: date_of_birth.map(|date| date.parse().unwrap()),
            date_of_death: date_of_death.map(|date| date.parse().unwrap()),
        }
    }

    fn sorted_authors() -> Vec<AuthorRecord> {
        vec![
            author("Jane", "Austen", Some("1775-12-16"), Some("1817-07-18")),
            author("Amitav", "Ghosh", Some("1835-11-30"), Some("1910-04-21")),
            author(
                "Rabindranath",
                "Tagore",
                Some("1812-02-07"),
                Some("1870-06-09"),
            ),
        ]
    }

    fn fixed(authors: Vec<AuthorRecord>) -> Arc<FixedAuthorRepository> {
        Arc::new(FixedAuthorRepository {
            authors,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn format_sorted_list() {
        let repository = fixed(sorted_authors());
        let manager = AuthorQueryManager::new(repository.clone());

        assert_eq!(
            manager.get_author_list().await,
            [
                "Austen, Jane : 1775 - 1817",
                "Ghosh, Amitav : 1835 - 1910",
                "Tagore, Rabindranath : 1812 - 1870",
            ]
        );
        assert_eq!(
            *repository.orderings.lock().unwrap(),
            [Ordering::parse("family_name ascending").unwrap()]
        );
    }

    #[tokio::test]
    async fn empty_first_name() {
        let mut authors = sorted_authors();
        authors[0].first_name = String::new();
        let manager = AuthorQueryManager::new(fixed(authors));

        assert_eq!(
            manager.get_author_list().await,
            [
                " : 1775 - 1817",
                "Ghosh, Amitav : 1835 - 1910",
                "Tagore, Rabindranath : 1812 - 1870",
            ]
        );
    }

    #[tokio::test]
    async fn unknown_dates() {
        let manager = AuthorQueryManager::new(fixed(vec![
            author("Jane", "Austen", None, Some("1817-07-18")),
            author("Amitav", "Ghosh", None, Some("1910-04-21")),
            author("Rabindranath", "Tagore", Some("1812-02-07"), None),
            author("Bob", "Billings", None, None),
        ]));

        assert_eq!(
            manager.get_author_list().await,
            [
                "Austen, Jane :  - 1817",
                "Ghosh, Amitav :  - 1910",
                "Tagore, Rabindranath : 1812 - ",
                "Billings, Bob :  - ",
            ]
        );
    }

    #[tokio::test]
    async fn keep_repository_order() {
        let mut authors = sorted_authors();
        authors.reverse();
        let manager = AuthorQueryManager::new(fixed(authors));

        assert_eq!(
            manager.get_author_list().await,
            [
                "Tagore, Rabindranath : 1812 - 1870",
                "Ghosh, Amitav : 1835 - 1910",
                "Austen, Jane : 1775 - 1817",
            ]
        );
    }

    #[tokio::test]
    async fn year_ignores_offset() {
        let manager = AuthorQueryManager::new(fixed(vec![AuthorRecord {
            first_name: "Jane".into(),
            family_name: "Austen".into(),
            date_of_birth: Some(UtcDateTime::parse_rfc3339("1775-12-31T23:30:00-02:00").unwrap()),
            date_of_death: Some(UtcDateTime::parse_rfc3339("1817-07-18T00:00:00Z").unwrap()),
        }]));

        assert_eq!(
            manager.get_author_list().await,
            ["Austen, Jane : 1776 - 1817"]
        );
    }

    #[tokio::test]
    async fn repository_error() {
        let (events, _guard) = ErrorEvents::capture();

        let manager = AuthorQueryManager::new(Arc::new(FailingAuthorRepository));

        assert!(manager.get_author_list().await.is_empty());
        assert_eq!(
            events.events(),
            [event_fields([
                ("message", "Error fetching authors"),
                ("error.kind", "internal"),
                ("error", "internal error: Database error"),
            ])]
        );

        assert!(manager.try_get_author_list().await.is_err());
        assert_eq!(events.events().len(), 1);
    }

    #[tokio::test]
    async fn idempotent() {
        let repository = Arc::new(MemoryAuthorRepository::with_data(vec![
            author("Amitav", "Ghosh", Some("1835-11-30"), Some("1910-04-21")),
            author("Jane", "Austen", Some("1775-12-16"), Some("1817-07-18")),
        ]));
        let manager = AuthorQueryManager::new(repository);

        let first = manager.get_author_list().await;
        assert_eq!(
            first,
            ["Austen, Jane : 1775 - 1817", "Ghosh, Amitav : 1835 - 1910"]
        );
        assert_eq!(manager.get_author_list().await, first);
        assert_eq!(manager.author_list().await.unwrap(), first);
    }
}
