pub mod common {
    pub use catalog_common::*;
}

#[cfg(feature = "request")]
pub mod request {
    pub use catalog_request::*;
}

#[cfg(feature = "service")]
pub mod service {
    pub use catalog_service::*;
}
