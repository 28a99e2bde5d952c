// src/db/kv.rs
use rusqlite::{params, OptionalExtension};

use crate::db::connection::Database;
use crate::errors::ServerError;

/// String-keyed storage holding one serialized value per key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        self.with_conn(|conn| {
            conn.query_row(
                "select value from kv_store where key = ?",
                params![key],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("kv get failed: {e}")))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                insert into kv_store (key, value, updated_at)
                values (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                on conflict(key) do update set
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, value],
            )
            .map_err(|e| ServerError::DbError(format!("kv set failed: {e}")))?;
            Ok(())
        })
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;


impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        (**self).set(key, value)
    }
}
