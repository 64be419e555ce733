//! Entity handlers, one module per resource.
//!
//! Every handler performs at most one database round trip and keeps no
//! state of its own between requests.

pub mod city;
pub mod continent;
pub mod country;
