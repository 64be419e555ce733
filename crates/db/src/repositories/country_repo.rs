//! Repository for the `countries` table.

use crate::database::{Database, DbError, SqlParam};
use crate::models::country::{Country, CountryDetails, CountryInput};

/// Provides CRUD operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a new country, returning its generated id as text.
    ///
    /// The parent continent is not checked; only the table's own foreign
    /// key (if any) can reject a dangling `continent_id`.
    pub async fn create(db: &dyn Database, input: &CountryInput) -> Result<String, DbError> {
        super::insert_returning_id(
            db,
            "INSERT INTO countries (name, continent_id) VALUES ($1, $2) RETURNING id::text",
            &[
                SqlParam::from(input.name.as_str()),
                SqlParam::from(input.continent_id),
            ],
        )
        .await
    }

    pub async fn find_by_id(
        db: &dyn Database,
        id: &str,
    ) -> Result<Option<CountryDetails>, DbError> {
        db.query_row(
            "SELECT name, continent_id FROM countries WHERE id = $1::bigint",
            &[SqlParam::from(id)],
        )
        .await?
        .as_ref()
        .map(CountryDetails::try_from)
        .transpose()
    }

    pub async fn list(db: &dyn Database) -> Result<Vec<Country>, DbError> {
        super::collect_rows(db, "SELECT id, name, continent_id FROM countries").await
    }

    /// Overwrite a country. Returns the number of rows matched.
    pub async fn update(db: &dyn Database, id: &str, input: &CountryInput) -> Result<u64, DbError> {
        db.execute(
            "UPDATE countries SET name = $1, continent_id = $2 WHERE id = $3::bigint",
            &[
                SqlParam::from(input.name.as_str()),
                SqlParam::from(input.continent_id),
                SqlParam::from(id),
            ],
        )
        .await
    }

    /// Delete a country. Returns the number of rows removed.
    pub async fn delete(db: &dyn Database, id: &str) -> Result<u64, DbError> {
        db.execute(
            "DELETE FROM countries WHERE id = $1::bigint",
            &[SqlParam::from(id)],
        )
        .await
    }
}
