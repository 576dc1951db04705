use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use catalog_common::date_time::UtcDateTime;
use catalog_request::{
    ordering::Ordering,
    schema::{FieldMemberSchema, Schema, SchemaMapped},
    value::Value,
};
use serde::Deserialize;

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// Author record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorRecord {
    /// Given name, may be empty
    #[serde(default)]
    pub first_name: String,
    /// Family name, used as the sort key
    pub family_name: String,
    pub date_of_birth: Option<UtcDateTime>,
    pub date_of_death: Option<UtcDateTime>,
}

/// Storage for author records.
#[async_trait]
pub trait AuthorRepository: Debug {
    /// Selects every author, sorted by `ordering`.
    async fn select_all(&self, ordering: &Ordering) -> AppResult<Vec<AuthorRecord>>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;

impl AuthorRecord {
    pub fn get_schema() -> Schema {
        Schema::new([
            ("first_name", FieldMemberSchema::new_ordered()),
            ("family_name", FieldMemberSchema::new_ordered()),
            ("date_of_birth", FieldMemberSchema::new_ordered()),
            ("date_of_death", FieldMemberSchema::new_ordered()),
        ])
    }
}

impl SchemaMapped for AuthorRecord {
    fn get_field(&self, name: &str) -> Value {
        match name {
            "first_name" => self.first_name.clone().into(),
            "family_name" => self.family_name.clone().into(),
            "date_of_birth" => self.date_of_birth.into(),
            "date_of_death" => self.date_of_death.into(),
            _ => unimplemented!("SchemaMapped for AuthorRecord::{name}"),
        }
    }
}
