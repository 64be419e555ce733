//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&dyn Database` as the first argument. Identifiers arrive
//! as strings straight from the request path and are cast by the
//! statement itself.

pub mod city_repo;
pub mod continent_repo;
pub mod country_repo;

pub use city_repo::CityRepo;
pub use continent_repo::ContinentRepo;
pub use country_repo::CountryRepo;

use futures::stream::{StreamExt, TryStreamExt};

use crate::database::{Database, DbError, Record, SqlParam};

/// Run an `INSERT ... RETURNING id::text` and read back the new id.
async fn insert_returning_id(
    db: &dyn Database,
    statement: &str,
    params: &[SqlParam],
) -> Result<String, DbError> {
    db.query_row(statement, params)
        .await?
        .ok_or_else(|| DbError::Decode("insert returned no identifier".to_string()))?
        .text(0)
}

/// Drain a multi-row query into a vector.
///
/// The first failing row aborts the scan; rows read before it are dropped.
async fn collect_rows<T>(db: &dyn Database, statement: &str) -> Result<Vec<T>, DbError>
where
    T: for<'r> TryFrom<&'r Record, Error = DbError>,
{
    db.query_rows(statement, &[])
        .map(|row| row.and_then(|row| T::try_from(&row)))
        .try_collect()
        .await
}
