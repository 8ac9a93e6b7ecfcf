pub mod action;
pub mod aggregate;
pub mod dates;
pub mod error;
pub mod generator;
pub mod publisher;
pub mod seed;
pub mod topactions;

pub use error::{LegoError, Result};
