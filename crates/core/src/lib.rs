#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;

pub use error::Error;
