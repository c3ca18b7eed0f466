//! Location request descriptor, its mutators and identity semantics

pub mod location_request;
pub mod error;

pub use location_request::LocationRequest;
pub use error::{RequestError, RequestResult};
