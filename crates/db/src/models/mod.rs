//! Entity models and request DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` list-row struct (`id` plus every column)
//! - A `Serialize` detail struct returned when one row is read by id
//! - A `Deserialize` input DTO used by both create and update

pub mod city;
pub mod continent;
pub mod country;
