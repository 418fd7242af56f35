pub mod handlers;
pub mod views;

use chrono::Utc;
use diesel::prelude::*;
use diesel::PgConnection;
use thiserror::Error;

use crate::shared::models::{NewTodo, Todo};
use crate::shared::utils::DbPool;

const CREATE_TODOS_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    sno SERIAL PRIMARY KEY,
    title VARCHAR(200) NOT NULL,
    description VARCHAR(500) NOT NULL,
    date_created TIMESTAMPTZ NOT NULL
)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo not found")]
    NotFound,
    #[error("invalid todo: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(String),
    #[error("blocking task failed: {0}")]
    Runtime(String),
}

fn validate_fields(title: &str, description: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation("title must not be empty".into()));
    }
    if description.trim().is_empty() {
        return Err(StoreError::Validation("description must not be empty".into()));
    }
    Ok(())
}

/// Owns all access to the `todos` table. Constructed once at startup around
/// the connection pool and shared through `AppState`.
#[derive(Clone)]
pub struct TodoStore {
    pool: DbPool,
}

impl TodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| StoreError::Pool(e.to_string()))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| StoreError::Runtime(e.to_string()))?
    }

    /// Idempotent schema creation. Safe to call from multiple workers racing
    /// at startup; an already-existing table is not an error.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.blocking(|conn| {
            diesel::sql_query(CREATE_TODOS_TABLE).execute(conn)?;
            Ok(())
        })
        .await
    }

    pub async fn create(&self, title: &str, description: &str) -> Result<Todo, StoreError> {
        validate_fields(title, description)?;
        let new_todo = NewTodo {
            title: title.to_string(),
            description: description.to_string(),
            date_created: Utc::now(),
        };
        self.blocking(move |conn| {
            use crate::shared::models::schema::todos::dsl::*;
            let created = diesel::insert_into(todos)
                .values(&new_todo)
                .get_result::<Todo>(conn)?;
            Ok(created)
        })
        .await
    }

    /// Every todo, in ascending primary-key order.
    pub async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        self.blocking(|conn| {
            use crate::shared::models::schema::todos::dsl::*;
            Ok(todos.order(sno.asc()).load::<Todo>(conn)?)
        })
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Todo, StoreError> {
        self.blocking(move |conn| {
            use crate::shared::models::schema::todos::dsl::*;
            todos
                .find(id)
                .first::<Todo>(conn)
                .optional()?
                .ok_or(StoreError::NotFound)
        })
        .await
    }

    /// Overwrites title and description only; `sno` and `date_created` are
    /// immutable after creation.
    pub async fn update(
        &self,
        id: i32,
        new_title: &str,
        new_description: &str,
    ) -> Result<Todo, StoreError> {
        validate_fields(new_title, new_description)?;
        let new_title = new_title.to_string();
        let new_description = new_description.to_string();
        self.blocking(move |conn| {
            use crate::shared::models::schema::todos::dsl::*;
            diesel::update(todos.find(id))
                .set((title.eq(new_title), description.eq(new_description)))
                .get_result::<Todo>(conn)
                .optional()?
                .ok_or(StoreError::NotFound)
        })
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.blocking(move |conn| {
            use crate::shared::models::schema::todos::dsl::*;
            let removed = diesel::delete(todos.find(id)).execute(conn)?;
            if removed == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(matches!(
            validate_fields("", "2 liters"),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_fields("Buy milk", "   "),
            Err(StoreError::Validation(_))
        ));
        assert!(validate_fields("Buy milk", "2 liters").is_ok());
    }
}
