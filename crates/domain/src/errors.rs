use thiserror::Error;

/// 入力検証で発生するドメインエラー
///
/// いずれもクライアント起因であり、ストアへ到達する前に検出されます。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid id")]
    InvalidTodoId(String),

    #[error("title is required")]
    MissingTitle,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title must be at most {0} characters")]
    TitleTooLong(usize),

    #[error("title must be a string")]
    TitleNotString,
}
