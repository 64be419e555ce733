//! Repository for the `cities` table.

use crate::database::{Database, DbError, SqlParam};
use crate::models::city::{City, CityDetails, CityInput};

pub struct CityRepo;

impl CityRepo {
    pub async fn create(db: &dyn Database, input: &CityInput) -> Result<String, DbError> {
        super::insert_returning_id(
            db,
            "INSERT INTO cities (name, country_id) VALUES ($1, $2) RETURNING id::text",
            &[
                SqlParam::from(input.name.as_str()),
                SqlParam::from(input.country_id),
            ],
        )
        .await
    }

    pub async fn find_by_id(db: &dyn Database, id: &str) -> Result<Option<CityDetails>, DbError> {
        db.query_row(
            "SELECT name, country_id FROM cities WHERE id = $1::bigint",
            &[SqlParam::from(id)],
        )
        .await?
        .as_ref()
        .map(CityDetails::try_from)
        .transpose()
    }

    pub async fn list(db: &dyn Database) -> Result<Vec<City>, DbError> {
        super::collect_rows(db, "SELECT id, name, country_id FROM cities").await
    }

    pub async fn update(db: &dyn Database, id: &str, input: &CityInput) -> Result<u64, DbError> {
        db.execute(
            "UPDATE cities SET name = $1, country_id = $2 WHERE id = $3::bigint",
            &[
                SqlParam::from(input.name.as_str()),
                SqlParam::from(input.country_id),
                SqlParam::from(id),
            ],
        )
        .await
    }

    pub async fn delete(db: &dyn Database, id: &str) -> Result<u64, DbError> {
        db.execute("DELETE FROM cities WHERE id = $1::bigint", &[SqlParam::from(id)])
            .await
    }
}
