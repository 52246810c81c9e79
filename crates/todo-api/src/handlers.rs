use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::{Todo, TodoId};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{CreateTodoRequest, HealthBody, UpdateTodoRequest, UpdateTodoResponse};
use crate::AppState;

/// ヘルスチェックで名乗るサービス名
pub const SERVICE_NAME: &str = "node-app";

/// 空のボディは `{}` として扱う
fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    Ok(raw.parse::<TodoId>()?)
}

/// ストアには触れない
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        service: SERVICE_NAME,
    })
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.repo.list().await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input: CreateTodoRequest = parse_body(&body)?;
    let new_todo = input.validate()?;

    let todo = state.repo.create(&new_todo).await?;
    tracing::info!(todo_id = %todo.id, "todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// 部分更新
///
/// レスポンスは更新後の行を読み直さず、送られた値を返す。
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<UpdateTodoResponse>, ApiError> {
    let id = parse_id(&id)?;
    let input: UpdateTodoRequest = parse_body(&body)?;
    let patch = input.to_patch()?;

    state.repo.update(id, &patch).await?;
    tracing::info!(todo_id = %id, "todo updated");

    Ok(Json(UpdateTodoResponse::echo(id, input)))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    state.repo.delete(id).await?;
    tracing::info!(todo_id = %id, "todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
