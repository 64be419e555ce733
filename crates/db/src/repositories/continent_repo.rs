//! Repository for the `continents` table.

use crate::database::{Database, DbError, SqlParam};
use crate::models::continent::{Continent, ContinentDetails, ContinentInput};

/// Provides CRUD operations for continents.
pub struct ContinentRepo;

impl ContinentRepo {
    /// Insert a new continent, returning its generated id as text.
    pub async fn create(db: &dyn Database, input: &ContinentInput) -> Result<String, DbError> {
        super::insert_returning_id(
            db,
            "INSERT INTO continents (name) VALUES ($1) RETURNING id::text",
            &[SqlParam::from(input.name.as_str())],
        )
        .await
    }

    /// Find a continent by id.
    pub async fn find_by_id(
        db: &dyn Database,
        id: &str,
    ) -> Result<Option<ContinentDetails>, DbError> {
        db.query_row(
            "SELECT name FROM continents WHERE id = $1::bigint",
            &[SqlParam::from(id)],
        )
        .await?
        .as_ref()
        .map(ContinentDetails::try_from)
        .transpose()
    }

    /// List every continent in the order the database returns them.
    pub async fn list(db: &dyn Database) -> Result<Vec<Continent>, DbError> {
        super::collect_rows(db, "SELECT id, name FROM continents").await
    }

    /// Overwrite a continent. Returns the number of rows matched.
    pub async fn update(
        db: &dyn Database,
        id: &str,
        input: &ContinentInput,
    ) -> Result<u64, DbError> {
        db.execute(
            "UPDATE continents SET name = $1 WHERE id = $2::bigint",
            &[SqlParam::from(input.name.as_str()), SqlParam::from(id)],
        )
        .await
    }

    /// Delete a continent. Returns the number of rows removed.
    pub async fn delete(db: &dyn Database, id: &str) -> Result<u64, DbError> {
        db.execute(
            "DELETE FROM continents WHERE id = $1::bigint",
            &[SqlParam::from(id)],
        )
        .await
    }
}
