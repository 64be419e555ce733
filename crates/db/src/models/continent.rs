//! Continent entity model and DTOs.

use atlas_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::database::{DbError, Record};

pub const ENTITY: &str = "Continent";

/// A row from the `continents` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Continent {
    pub id: DbId,
    pub name: String,
}

/// A continent read by id. The id is already known to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentDetails {
    pub name: String,
}

/// Body of `POST /continent` and `PUT /continent/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContinentInput {
    pub name: String,
}

impl TryFrom<&Record> for Continent {
    type Error = DbError;

    fn try_from(row: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.int(0)?,
            name: row.text(1)?,
        })
    }
}

impl TryFrom<&Record> for ContinentDetails {
    type Error = DbError;

    fn try_from(row: &Record) -> Result<Self, Self::Error> {
        Ok(Self { name: row.text(0)? })
    }
}
