//! Database capability trait and its PostgreSQL implementation.
//!
//! Repositories talk to [`Database`] rather than to a concrete pool, so the
//! HTTP layer can be exercised against an in-memory substitute. Rows cross
//! the boundary as [`Record`]s of plain [`SqlValue`]s.

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, Postgres, Row, TypeInfo, ValueRef};

use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Row decode error: {0}")]
    Decode(String),
}

/// A positional statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Int(i64),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

/// A single decoded column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Text(String),
}

/// One result row, columns in select-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: Vec<SqlValue>,
}

impl Record {
    pub fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw column value, `None` past the last column.
    pub fn get(&self, idx: usize) -> Option<&SqlValue> {
        self.values.get(idx)
    }

    /// Read column `idx` as text.
    pub fn text(&self, idx: usize) -> Result<String, DbError> {
        match self.column(idx)? {
            SqlValue::Text(value) => Ok(value.clone()),
            other => Err(DbError::Decode(format!(
                "column {idx}: expected text, found {other:?}"
            ))),
        }
    }

    /// Read column `idx` as an integer.
    pub fn int(&self, idx: usize) -> Result<i64, DbError> {
        match self.column(idx)? {
            SqlValue::Int(value) => Ok(*value),
            other => Err(DbError::Decode(format!(
                "column {idx}: expected integer, found {other:?}"
            ))),
        }
    }

    fn column(&self, idx: usize) -> Result<&SqlValue, DbError> {
        self.values.get(idx).ok_or_else(|| {
            DbError::Decode(format!(
                "column {idx} out of range (row has {} columns)",
                self.values.len()
            ))
        })
    }
}

impl From<Vec<SqlValue>> for Record {
    fn from(values: Vec<SqlValue>) -> Self {
        Self::new(values)
    }
}

/// The three database operations handlers depend on.
#[async_trait]
pub trait Database: Send + Sync {
    /// Run a statement that returns no rows. Yields the affected-row count.
    async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<u64, DbError>;

    /// Run a statement expected to return at most one row.
    ///
    /// Returns `Ok(None)` when the statement matched nothing.
    async fn query_row(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Option<Record>, DbError>;

    /// Run a statement and stream its rows in the order the server sends them.
    fn query_rows<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [SqlParam],
    ) -> BoxStream<'a, Result<Record, DbError>>;
}

/// [`Database`] backed by a sqlx PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgDatabase {
    pool: DbPool,
}

impl PgDatabase {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<u64, DbError> {
        let result = bind_params(statement, params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn query_row(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Option<Record>, DbError> {
        bind_params(statement, params)
            .fetch_optional(&self.pool)
            .await?
            .map(|row| decode_row(&row))
            .transpose()
    }

    fn query_rows<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [SqlParam],
    ) -> BoxStream<'a, Result<Record, DbError>> {
        bind_params(statement, params)
            .fetch(&self.pool)
            .map(|row| row.map_err(DbError::from).and_then(|row| decode_row(&row)))
            .boxed()
    }
}

fn bind_params<'q>(statement: &'q str, params: &'q [SqlParam]) -> Query<'q, Postgres, PgArguments> {
    params
        .iter()
        .fold(sqlx::query(statement), |query, param| match param {
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.as_str()),
        })
}

/// Convert a driver row into a [`Record`].
///
/// Integer columns of any width become [`SqlValue::Int`]; character
/// columns become [`SqlValue::Text`]. Other column types are rejected.
fn decode_row(row: &PgRow) -> Result<Record, DbError> {
    let mut values = Vec::with_capacity(row.len());

    for (idx, column) in row.columns().iter().enumerate() {
        if row.try_get_raw(idx)?.is_null() {
            values.push(SqlValue::Null);
            continue;
        }

        let value = match column.type_info().name() {
            "INT2" => SqlValue::Int(row.try_get::<i16, _>(idx)?.into()),
            "INT4" => SqlValue::Int(row.try_get::<i32, _>(idx)?.into()),
            "INT8" => SqlValue::Int(row.try_get::<i64, _>(idx)?),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
                SqlValue::Text(row.try_get::<String, _>(idx)?)
            }
            other => {
                return Err(DbError::Decode(format!(
                    "unsupported type {other} for column '{}'",
                    column.name()
                )));
            }
        };
        values.push(value);
    }

    Ok(Record::new(values))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn continent_row() -> Record {
        Record::new(vec![SqlValue::Int(1), SqlValue::Text("Europe".into())])
    }

    #[test]
    fn typed_accessors_read_matching_columns() {
        let row = continent_row();
        assert_eq!(row.len(), 2);
        assert_eq!(row.int(0).unwrap(), 1);
        assert_eq!(row.text(1).unwrap(), "Europe");
    }

    #[test]
    fn type_mismatch_is_decode_error() {
        let row = continent_row();
        assert_matches!(row.text(0), Err(DbError::Decode(_)));
        assert_matches!(row.int(1), Err(DbError::Decode(_)));
    }

    #[test]
    fn null_is_not_a_value() {
        let row = Record::new(vec![SqlValue::Null]);
        assert_matches!(row.text(0), Err(DbError::Decode(_)));
        assert_matches!(row.int(0), Err(DbError::Decode(_)));
    }

    #[test]
    fn out_of_range_column_is_decode_error() {
        let err = continent_row().text(5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row decode error: column 5 out of range (row has 2 columns)"
        );
    }

    #[test]
    fn params_convert_from_plain_values() {
        assert_eq!(SqlParam::from(4), SqlParam::Int(4));
        assert_eq!(SqlParam::from("7"), SqlParam::Text("7".into()));
        assert_eq!(SqlParam::from(String::from("x")), SqlParam::Text("x".into()));
    }
}
