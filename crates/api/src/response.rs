//! Shared response bodies for the entity handlers.

use serde::Serialize;

/// `{ "id": "..." }` returned by every create endpoint.
///
/// The id is whatever text the database handed back from
/// `INSERT ... RETURNING`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// `{ "status": "..." }` returned by update and delete.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const UPDATED: Self = Self { status: "updated" };
    pub const DELETED: Self = Self { status: "deleted" };
}
