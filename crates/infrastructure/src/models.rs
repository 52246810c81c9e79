use domain::{Todo, TodoId};
use sqlx::FromRow;

/// todos テーブルの 1 行
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    // DEFAULT 0 のみで NOT NULL 制約はない
    pub done: Option<i8>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::new(row.id),
            title: row.title,
            done: row.done.unwrap_or(0) != 0,
        }
    }
}
