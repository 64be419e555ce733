//! Country entity model and DTOs.

use atlas_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::database::{DbError, Record};

pub const ENTITY: &str = "Country";

/// A row from the `countries` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
    pub continent_id: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDetails {
    pub name: String,
    pub continent_id: DbId,
}

/// Body of `POST /country` and `PUT /country/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryInput {
    pub name: String,
    pub continent_id: DbId,
}

impl TryFrom<&Record> for Country {
    type Error = DbError;

    fn try_from(row: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.int(0)?,
            name: row.text(1)?,
            continent_id: row.int(2)?,
        })
    }
}

impl TryFrom<&Record> for CountryDetails {
    type Error = DbError;

    fn try_from(row: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            name: row.text(0)?,
            continent_id: row.int(1)?,
        })
    }
}
