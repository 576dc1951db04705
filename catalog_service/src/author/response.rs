use serde::Serialize;

/// Message sent when there is no author to list.
pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// Payload of an author list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthorListPayload {
    /// Formatted author lines.
    Authors(Vec<String>),
    /// Plain text message.
    Message(String),
}

/// Receives the single payload of a handled request.
pub trait ResponseSink {
    fn send(&mut self, payload: AuthorListPayload);
}

impl AuthorListPayload {
    pub fn no_authors_found() -> Self {
        Self::Message(NO_AUTHORS_FOUND.into())
    }
}

impl ResponseSink for Vec<AuthorListPayload> {
    fn send(&mut self, payload: AuthorListPayload) {
        self.push(payload);
    }
}
