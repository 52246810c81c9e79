//! Todo HTTP API（axum）
//!
//! `/health` と `/api/todos` の CRUD を提供します。永続化は `TodoRepository` に委ね、
//! このクレートは入力検証とステータスコード・JSON への変換のみを担当します。

use std::future::Future;
use std::sync::Arc;

use infrastructure::TodoRepository;
use tokio::net::TcpListener;

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

pub use error::ApiError;
pub use router::app;

/// アプリケーションの共有状態
///
/// 起動時に一度だけ構築し、各ハンドラへ注入します。
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

/// `shutdown` が完了するまでリクエストを受け付け、処理中のリクエストを捌き切ってから戻ります。
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
