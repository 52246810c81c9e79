use async_trait::async_trait;
use domain::{NewTodo, Todo, TodoId, TodoPatch};
use thiserror::Error;

/// ストア層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// 対象行が存在しない（影響行数 0 で判定）
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// todos テーブルへのアクセスを抽象化したリポジトリ
///
/// ハンドラは `Arc<dyn TodoRepository>` として共有するため、実装は `Send + Sync` であること。
/// 各操作は単一文で完結し、リトライは行いません。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// テーブルを用意し、空であればサンプル 2 件を投入します。何度呼んでも結果は同じです。
    async fn initialize(&self) -> Result<(), StoreError>;

    /// 全件を id の昇順で返します。
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// `done = false` で追加し、採番された id を含めて返します。
    async fn create(&self, new_todo: &NewTodo) -> Result<Todo, StoreError>;

    /// 部分更新。`None` のフィールドはストア側で既存値を維持します。
    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<(), StoreError>;

    async fn delete(&self, id: TodoId) -> Result<(), StoreError>;
}
