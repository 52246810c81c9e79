use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::{NewTodo, Todo, TodoId, TodoPatch};
use tokio::sync::RwLock;

use crate::repositories::{StoreError, TodoRepository};
use crate::schema::SEED_TODOS;

/// 簡易な InMemory 実装（開発/テスト用）
///
/// MySQL 実装と同じ契約を守ります。id は単調増加で再利用せず、部分更新は
/// 書き込みロック内で完結させるため読み取りと書き込みの間に競合は生じません。
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    // AUTO_INCREMENT 相当（削除しても巻き戻さない）
    last_id: i64,
    rows: BTreeMap<TodoId, Todo>,
}

impl MemoryState {
    fn insert(&mut self, title: &str, done: bool) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: TodoId::new(self.last_id),
            title: title.to_string(),
            done,
        };
        self.rows.insert(todo.id, todo.clone());
        todo
    }
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 任意の行を持った状態で作成します。
    pub fn with_todos<'a, I>(todos: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut state = MemoryState::default();
        for (title, done) in todos {
            state.insert(title, done);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// 保持している行数
    pub async fn count(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn get(&self, id: TodoId) -> Option<Todo> {
        self.state.read().await.rows.get(&id).cloned()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn initialize(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.rows.is_empty() {
            for (title, done) in SEED_TODOS {
                state.insert(title, done);
            }
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        // BTreeMap のため id 昇順
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn create(&self, new_todo: &NewTodo) -> Result<Todo, StoreError> {
        Ok(self.state.write().await.insert(new_todo.title(), false))
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let row = state.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if let Some(title) = &patch.title {
            row.title = title.clone();
        }
        if let Some(done) = patch.done {
            row.done = done;
        }
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.state
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
