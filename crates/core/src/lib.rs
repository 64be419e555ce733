//! Domain primitives shared by the Atlas database and API crates.

pub mod error;
pub mod types;
pub mod validation;
