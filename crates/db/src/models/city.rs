//! City entity model and DTOs.

use atlas_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::database::{DbError, Record};

pub const ENTITY: &str = "City";

/// A row from the `cities` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub country_id: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDetails {
    pub name: String,
    pub country_id: DbId,
}

/// Body of `POST /city` and `PUT /city/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CityInput {
    pub name: String,
    pub country_id: DbId,
}

impl TryFrom<&Record> for City {
    type Error = DbError;

    fn try_from(row: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.int(0)?,
            name: row.text(1)?,
            country_id: row.int(2)?,
        })
    }
}

impl TryFrom<&Record> for CityDetails {
    type Error = DbError;

    fn try_from(row: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            name: row.text(0)?,
            country_id: row.int(1)?,
        })
    }
}
