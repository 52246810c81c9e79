//! MySQL 実装の統合テスト
//!
//! 実際の MySQL が必要なため既定では無視されます。DB_* 環境変数で接続先を指定し、
//! `cargo test -p infrastructure -- --ignored` で実行してください。

use domain::{NewTodo, TodoId, TodoPatch};
use infrastructure::{MySqlTodoRepository, StoreError, TodoRepository};
use shared::Config;

async fn setup_repository() -> MySqlTodoRepository {
    let config = Config::from_env().expect("テスト用設定の読み込みに失敗");
    let repo = MySqlTodoRepository::connect(&config.database)
        .await
        .expect("テスト用MySQLへの接続に失敗");
    repo.initialize().await.expect("スキーマ初期化に失敗");
    repo
}

async fn create(repo: &MySqlTodoRepository, title: &str) -> domain::Todo {
    repo.create(&NewTodo::new(Some(title.to_string())).unwrap())
        .await
        .expect("作成に失敗")
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn initialize_is_idempotent() {
    let repo = setup_repository().await;
    let before = repo.list().await.unwrap().len();

    repo.initialize().await.unwrap();

    let after = repo.list().await.unwrap().len();
    assert_eq!(before, after);
    assert!(after >= 1, "空のテーブルには初期データが投入されるはず");
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn create_then_list_contains_new_row() {
    let repo = setup_repository().await;

    let created = create(&repo, "integration create").await;
    assert!(!created.done);

    let todos = repo.list().await.unwrap();
    let found: Vec<_> = todos.iter().filter(|t| t.id == created.id).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "integration create");
    assert!(!found[0].done);

    // id の昇順
    assert!(todos.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn partial_update_preserves_other_columns() {
    let repo = setup_repository().await;
    let created = create(&repo, "integration partial").await;

    repo.update(created.id, &TodoPatch::new(None, Some(true)).unwrap())
        .await
        .unwrap();

    let stored = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|t| t.id == created.id)
        .unwrap();
    assert_eq!(stored.title, "integration partial");
    assert!(stored.done);

    // 値が変わらない更新でも一致行があれば成功扱い
    repo.update(created.id, &TodoPatch::new(None, Some(true)).unwrap())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn delete_removes_row_and_second_delete_is_not_found() {
    let repo = setup_repository().await;
    let created = create(&repo, "integration delete").await;

    repo.delete(created.id).await.unwrap();

    let todos = repo.list().await.unwrap();
    assert!(todos.iter().all(|t| t.id != created.id));

    let err = repo.delete(created.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn unknown_id_is_not_found() {
    let repo = setup_repository().await;
    let missing = TodoId::new(i32::MAX as i64);

    let err = repo
        .update(missing, &TodoPatch::new(Some("x".into()), None).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));

    let err = repo.delete(missing).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}
