pub mod error;
pub mod ordering;
pub mod schema;
pub mod value;

#[cfg(any(feature = "testing", debug_assertions))]
pub mod testing;
