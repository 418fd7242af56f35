use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

pub mod schema {
    diesel::table! {
        todos (sno) {
            sno -> Int4,
            #[max_length = 200]
            title -> Varchar,
            #[max_length = 500]
            description -> Varchar,
            date_created -> Timestamptz,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, Selectable)]
#[diesel(table_name = schema::todos, primary_key(sno))]
pub struct Todo {
    pub sno: i32,
    pub title: String,
    pub description: String,
    pub date_created: DateTime<Utc>,
}

impl std::fmt::Display for Todo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.sno, self.title)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::todos)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub date_created: DateTime<Utc>,
}

pub use schema::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_display() {
        let todo = Todo {
            sno: 7,
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
            date_created: Utc::now(),
        };
        assert_eq!(todo.to_string(), "7 - Buy milk");
    }
}
