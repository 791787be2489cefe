//! Purchase records and their error type.

pub mod entity;
pub mod error;

pub use error::*;
