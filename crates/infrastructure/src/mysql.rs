use async_trait::async_trait;
use domain::{NewTodo, Todo, TodoId, TodoPatch};
use shared::DatabaseConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::{info, instrument};

use crate::models::TodoRow;
use crate::repositories::{StoreError, TodoRepository};
use crate::schema::{CREATE_TODOS_TABLE, SEED_TODOS};

/// MySQL の todos テーブルを扱うリポジトリ
///
/// 接続プールはプロセス起動時に一度だけ作成し、以降は全リクエストで共有します。
/// 空き接続がない場合、リクエストは失敗せずプールの解放を待ちます。
#[derive(Debug, Clone)]
pub struct MySqlTodoRepository {
    pool: MySqlPool,
}

impl MySqlTodoRepository {
    /// 設定に従って上限付きのプールを作成します。
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.pool_size)
            .connect_with(options)
            .await?;

        info!(
            host = %config.host,
            database = %config.name,
            pool_size = config.pool_size,
            "connected to MySQL"
        );

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for MySqlTodoRepository {
    async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TODOS_TABLE).execute(&self.pool).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&self.pool)
            .await?;

        if count == 0 {
            let placeholders = vec!["(?, ?)"; SEED_TODOS.len()].join(", ");
            let sql = format!("INSERT INTO todos (title, done) VALUES {placeholders}");
            let mut query = sqlx::query(&sql);
            for (title, done) in SEED_TODOS {
                query = query.bind(title).bind(i8::from(done));
            }
            query.execute(&self.pool).await?;
            info!(rows = SEED_TODOS.len(), "seeded empty todos table");
        }

        info!("todos table ready");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, title, done FROM todos ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[instrument(level = "debug", skip(self, new_todo))]
    async fn create(&self, new_todo: &NewTodo) -> Result<Todo, StoreError> {
        let result = sqlx::query("INSERT INTO todos (title, done) VALUES (?, 0)")
            .bind(new_todo.title())
            .execute(&self.pool)
            .await?;

        Ok(Todo {
            id: TodoId::new(result.last_insert_id() as i64),
            title: new_todo.title().to_string(),
            done: false,
        })
    }

    #[instrument(level = "debug", skip(self))]
    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<(), StoreError> {
        // COALESCE により未指定フィールドの既存値維持をストア側で解決する
        let result = sqlx::query(
            "UPDATE todos SET title = COALESCE(?, title), done = COALESCE(?, done) WHERE id = ?",
        )
        .bind(patch.title.as_deref())
        .bind(patch.done.map(i8::from))
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
