use domain::{DomainError, NewTodo, TodoId, TodoPatch};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// POST /api/todos リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
}

impl CreateTodoRequest {
    pub fn validate(self) -> Result<NewTodo, DomainError> {
        NewTodo::new(self.title)
    }
}

/// 存在するキーの値は `null` であっても `Some(Value::Null)` として保持する
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// PUT /api/todos/:id リクエスト
///
/// 送られた値をそのまま保持します。キーの欠落（`None`）と明示的な `null` を区別し、
/// レスポンスでは後者を `null` として返します。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub done: Option<Value>,
}

impl UpdateTodoRequest {
    /// 文字列の `title` と真偽値の `done` だけを更新対象にします。
    ///
    /// `null` はどちらも未指定扱い。真偽値以外の `done` は無視し、
    /// 文字列以外の `title` は拒否します。
    pub fn to_patch(&self) -> Result<TodoPatch, DomainError> {
        let title = match &self.title {
            None | Some(Value::Null) => None,
            Some(Value::String(title)) => Some(title.clone()),
            Some(_) => return Err(DomainError::TitleNotString),
        };
        let done = self.done.as_ref().and_then(Value::as_bool);
        TodoPatch::new(title, done)
    }
}

/// PUT /api/todos/:id レスポンス
///
/// 更新後の行ではなく、リクエストで送られた値をそのまま返します。
#[derive(Debug, Serialize)]
pub struct UpdateTodoResponse {
    pub id: TodoId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<Value>,
}

impl UpdateTodoResponse {
    pub fn echo(id: TodoId, request: UpdateTodoRequest) -> Self {
        Self {
            id,
            title: request.title,
            done: request.done,
        }
    }
}

/// GET /health レスポンス
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_boolean_done_is_ignored_in_patch() {
        let request: UpdateTodoRequest = serde_json::from_value(json!({"done": "yes"})).unwrap();
        let patch = request.to_patch().unwrap();
        assert_eq!(patch.done, None);

        let request: UpdateTodoRequest = serde_json::from_value(json!({"done": false})).unwrap();
        assert_eq!(request.to_patch().unwrap().done, Some(false));
    }

    #[test]
    fn null_fields_are_kept_apart_from_absent_ones() {
        let request: UpdateTodoRequest =
            serde_json::from_value(json!({"title": null, "done": true})).unwrap();
        assert_eq!(request.title, Some(Value::Null));

        let patch = request.to_patch().unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.done, Some(true));

        let request: UpdateTodoRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.title.is_none() && request.done.is_none());
    }

    #[test]
    fn non_string_title_is_rejected() {
        let request: UpdateTodoRequest = serde_json::from_value(json!({"title": 5})).unwrap();
        assert_eq!(request.to_patch(), Err(DomainError::TitleNotString));
    }

    #[test]
    fn update_response_echoes_only_submitted_fields() {
        let request: UpdateTodoRequest = serde_json::from_value(json!({"done": true})).unwrap();
        let response = UpdateTodoResponse::echo(TodoId::new(1), request);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"id": 1, "done": true})
        );
    }

    #[test]
    fn update_response_echoes_explicit_null() {
        let request: UpdateTodoRequest =
            serde_json::from_value(json!({"title": "x", "done": null})).unwrap();
        let response = UpdateTodoResponse::echo(TodoId::new(1), request);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"id": 1, "title": "x", "done": null})
        );
    }
}
