//! SQLite-backed analytical store.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use rusqlite::Connection;
use rusqlite::types::Value;
use tracing::debug;

use orbis_common::any_to_string;
use orbis_model::ColumnKind;

use crate::error::StoreError;
use crate::store::AnalyticalStore;

/// Analytical store in a local SQLite database file.
///
/// A deferred store touches the filesystem only when the first table is
/// replaced.
pub struct SqliteStore {
    conn: Option<Connection>,
    path: Option<PathBuf>,
    name: String,
}

impl SqliteStore {
    /// Create or open a database at the given file path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self {
            conn: Some(conn),
            path: Some(path.to_path_buf()),
            name: format!("sqlite:{}", path.display()),
        })
    }

    /// Store for `path` whose database is created or opened on first use.
    pub fn deferred(path: &Path) -> Self {
        Self {
            conn: None,
            path: Some(path.to_path_buf()),
            name: format!("sqlite:{}", path.display()),
        }
    }

    /// Create an in-memory database for testing.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Some(conn),
            path: None,
            name: "sqlite::memory:".to_string(),
        })
    }

    /// Underlying connection, for read-back queries. `None` until a
    /// deferred store is first used.
    pub fn connection(&self) -> Option<&Connection> {
        self.conn.as_ref()
    }

    fn connect(&mut self) -> Result<&mut Connection, StoreError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => match &self.path {
                Some(path) => {
                    debug!(path = %path.display(), "opening sqlite store");
                    Connection::open(path)?
                }
                None => Connection::open_in_memory()?,
            },
        };
        Ok(self.conn.insert(conn))
    }

    /// Default database location for a project directory.
    pub fn default_path(project_dir: &Path) -> PathBuf {
        project_dir.join("orbis.sqlite")
    }
}

impl AnalyticalStore for SqliteStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn replace_table(&mut self, table: &str, df: &DataFrame) -> Result<u64, StoreError> {
        if df.width() == 0 {
            return Err(StoreError::NoColumns {
                table: table.to_string(),
            });
        }

        let columns = df.get_columns();
        let quoted_table = quote_identifier(table);
        let definitions: Vec<String> = columns
            .iter()
            .map(|column| {
                format!(
                    "{} {}",
                    quote_identifier(column.name()),
                    sql_type(column.dtype())
                )
            })
            .collect();
        let names: Vec<String> = columns
            .iter()
            .map(|column| quote_identifier(column.name()))
            .collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|idx| format!("?{idx}")).collect();

        let conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS {quoted_table}"), [])?;
        tx.execute(
            &format!("CREATE TABLE {quoted_table} ({})", definitions.join(", ")),
            [],
        )?;
        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO {quoted_table} ({}) VALUES ({})",
                names.join(", "),
                placeholders.join(", ")
            ))?;
            let mut row: Vec<Value> = Vec::with_capacity(columns.len());
            for idx in 0..df.height() {
                row.clear();
                row.extend(
                    columns
                        .iter()
                        .map(|column| sql_value(column.get(idx).unwrap_or(AnyValue::Null))),
                );
                insert.execute(rusqlite::params_from_iter(row.iter()))?;
            }
        }
        tx.commit()?;

        let stored: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {quoted_table}"),
            [],
            |row| row.get(0),
        )?;
        let stored = stored.max(0) as u64;
        let expected = df.height() as u64;
        if stored != expected {
            return Err(StoreError::RowCountMismatch {
                table: table.to_string(),
                expected,
                found: stored,
            });
        }

        debug!(store = %self.name, table, rows = stored, "replaced table");
        Ok(stored)
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sql_type(dtype: &DataType) -> &'static str {
    match dtype {
        DataType::Float32 | DataType::Float64 => "REAL",
        other if ColumnKind::of(other).is_numeric() => "INTEGER",
        _ => "TEXT",
    }
}

fn sql_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Int8(v) => Value::Integer(i64::from(v)),
        AnyValue::Int16(v) => Value::Integer(i64::from(v)),
        AnyValue::Int32(v) => Value::Integer(i64::from(v)),
        AnyValue::Int64(v) => Value::Integer(v),
        AnyValue::UInt8(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt16(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt32(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Real(v as f64),
        },
        AnyValue::Float32(v) => Value::Real(f64::from(v)),
        AnyValue::Float64(v) => Value::Real(v),
        other => Value::Text(any_to_string(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_identifier("tons"), "\"tons\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn maps_column_types() {
        assert_eq!(sql_type(&DataType::Int64), "INTEGER");
        assert_eq!(sql_type(&DataType::UInt64), "INTEGER");
        assert_eq!(sql_type(&DataType::Float64), "REAL");
        assert_eq!(sql_type(&DataType::String), "TEXT");
        assert_eq!(sql_type(&DataType::Boolean), "TEXT");
    }
}
