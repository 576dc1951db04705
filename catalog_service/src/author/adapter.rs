use tracing::error;

use crate::author::{
    query_manager::AuthorListSourceArc,
    response::{AuthorListPayload, ResponseSink},
};

/// Serves the author list to a response sink.
#[derive(Debug, Clone)]
pub struct AuthorAdapter {
    author_list_source: AuthorListSourceArc,
}

impl AuthorAdapter {
    pub fn new(author_list_source: AuthorListSourceArc) -> Self {
        AuthorAdapter { author_list_source }
    }

    /// Sends the author list, or [`NO_AUTHORS_FOUND`] when it is empty or
    /// cannot be produced.
    ///
    /// [`NO_AUTHORS_FOUND`]: crate::author::response::NO_AUTHORS_FOUND
    #[tracing::instrument(skip_all)]
    pub async fn show_all_authors<S>(&self, sink: &mut S)
    where
        S: ResponseSink + Send + ?Sized,
    {
        let payload = match self.author_list_source.author_list().await {
            Ok(authors) if !authors.is_empty() => AuthorListPayload::Authors(authors),
            Ok(_) => AuthorListPayload::no_authors_found(),
            Err(err) => {
                error!(error.kind = err.kind(), error = %err, "Error listing authors");
                AuthorListPayload::no_authors_found()
            }
        };
        sink.send(payload);
    }
}
