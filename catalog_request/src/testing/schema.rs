use crate::schema::{FieldMemberSchema, Schema, SchemaMapped};
use crate::value::Value;

pub struct UserItem {
    pub id: String,
    pub display_name: String,
    pub bio: String,
    pub age: i32,
}

impl UserItem {
    pub fn get_schema() -> Schema {
        Schema::new([
            ("id", FieldMemberSchema::new_ordered()),
            ("displayName", FieldMemberSchema::new_ordered()),
            ("bio", FieldMemberSchema::default()),
            ("age", FieldMemberSchema::new_ordered()),
        ])
    }
}

impl SchemaMapped for UserItem {
    fn get_field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.clone().into(),
            "displayName" => self.display_name.clone().into(),
            "bio" => self.bio.clone().into(),
            "age" => self.age.into(),
            _ => unimplemented!("SchemaMapped for UserItem::{name}"),
        }
    }
}
