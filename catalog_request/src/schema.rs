use std::collections::BTreeMap;

use crate::value::Value;

/// Schema of the fields a record exposes to queries.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Schema fields.
    pub fields: BTreeMap<String, FieldMemberSchema>,
}

/// Field member schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMemberSchema {
    /// Whether field is ordered.
    pub ordered: bool,
}

/// Trait for types that can be mapped to schema values.
pub trait SchemaMapped {
    /// Gets field value by name.
    fn get_field(&self, name: &str) -> Value;
}

impl Schema {
    pub fn new<I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, FieldMemberSchema)>,
        N: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, field)| (name.into(), field))
                .collect(),
        }
    }

    /// Gets field schema by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldMemberSchema> {
        self.fields.get(name)
    }
}

impl FieldMemberSchema {
    /// Creates a new ordered field member schema.
    pub const fn new_ordered() -> Self {
        Self { ordered: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::schema::UserItem;

    use super::*;

    #[test]
    fn get_field() {
        let schema = UserItem::get_schema();
        assert!(schema.get_field("displayName").unwrap().ordered);
        assert!(!schema.get_field("bio").unwrap().ordered);
        assert!(schema.get_field("age").unwrap().ordered);
        assert!(schema.get_field("missing").is_none());
    }
}
