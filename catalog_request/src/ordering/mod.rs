use std::{
    cmp,
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

use itertools::Itertools;

use crate::schema::{Schema, SchemaMapped};

use self::error::{OrderingError, OrderingResult};

pub mod error;

/// Sort specification made of one or more terms, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ordering {
    pub terms: Vec<OrderingTerm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingTerm {
    pub name: String,
    pub direction: OrderingDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingDirection {
    Ascending,
    Descending,
}

impl Ordering {
    pub fn new(terms: Vec<OrderingTerm>) -> Self {
        Ordering { terms }
    }

    /// Parses comma-separated terms like `"family_name asc, first_name desc"`.
    ///
    /// Direction defaults to ascending and also accepts the long forms
    /// `ascending` and `descending`.
    pub fn parse(source: &str) -> OrderingResult<Ordering> {
        let mut terms = Vec::new();
        let mut term_names = BTreeSet::new();
        for parts in source
            .split(',')
            .map(|part| part.split_whitespace().collect_vec())
            .filter(|parts| !parts.is_empty())
        {
            let (name, direction) = match parts.as_slice() {
                [name] => (*name, OrderingDirection::Ascending),
                [name, direction] => (*name, direction.parse()?),
                _ => return Err(OrderingError::InvalidTermFormat(parts.join(" "))),
            };

            if !term_names.insert(name.to_string()) {
                return Err(OrderingError::DuplicateField(name.into()));
            }

            terms.push(OrderingTerm {
                name: name.into(),
                direction,
            });
        }
        Ok(Ordering { terms })
    }

    pub fn evaluate<T>(&self, lhs: &T, rhs: &T) -> Option<cmp::Ordering>
    where
        T: SchemaMapped,
    {
        for term in self.terms.iter() {
            let a = lhs.get_field(&term.name);
            let b = rhs.get_field(&term.name);
            match a.partial_cmp(&b)? {
                cmp::Ordering::Equal => {}
                ordering => {
                    return Some(match term.direction {
                        OrderingDirection::Ascending => ordering,
                        OrderingDirection::Descending => ordering.reverse(),
                    });
                }
            }
        }
        Some(cmp::Ordering::Equal)
    }

    /// Checks that every term names an ordered field of `schema`.
    pub fn validate(&self, schema: &Schema) -> OrderingResult<()> {
        for term in self.terms.iter() {
            match schema.get_field(&term.name) {
                Some(field) if field.ordered => {}
                Some(_) => return Err(OrderingError::UnorderedField(term.name.clone())),
                None => return Err(OrderingError::UnknownMember(term.name.clone())),
            }
        }
        Ok(())
    }

    pub fn is_valid(&self, schema: &Schema) -> bool {
        self.validate(schema).is_ok()
    }
}

impl OrderingTerm {
    pub fn ascending<S: Into<String>>(name: S) -> Self {
        OrderingTerm {
            name: name.into(),
            direction: OrderingDirection::Ascending,
        }
    }
}

impl std::str::FromStr for OrderingDirection {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(OrderingDirection::Ascending),
            "desc" | "descending" => Ok(OrderingDirection::Descending),
            _ => Err(OrderingError::InvalidDirection(s.into())),
        }
    }
}

impl Display for Ordering {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.terms.iter().map(ToString::to_string).join(", "))
    }
}

impl Display for OrderingTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.direction)
    }
}

impl Display for OrderingDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OrderingDirection::Ascending => f.write_str("asc"),
            OrderingDirection::Descending => f.write_str("desc"),
        }
    }
}
