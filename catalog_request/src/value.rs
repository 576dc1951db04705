use std::cmp::Ordering;

use catalog_common::date_time::UtcDateTime;

/// Field value of a schema-mapped record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer value.
    Integer(i64),
    /// String value.
    String(String),
    /// Timestamp value.
    Timestamp(UtcDateTime),
    /// Absent value.
    Null,
}

/// Null sorts before every other value. Values of different types are not comparable.
impl PartialOrd<Self> for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Null, _) => Some(Ordering::Less),
            (_, Self::Null) => Some(Ordering::Greater),
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs.partial_cmp(rhs),
            (Self::String(lhs), Self::String(rhs)) => lhs.partial_cmp(rhs),
            (Self::Timestamp(lhs), Self::Timestamp(rhs)) => lhs.partial_cmp(rhs),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<UtcDateTime> for Value {
    fn from(value: UtcDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
