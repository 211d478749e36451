//! Shared data model for pagekit settings and translation catalogs.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_catalog};
