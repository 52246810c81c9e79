//! Todo ドメインモデル
//!
//! 永続化や HTTP には依存せず、Todo の形と入力検証のみを担当します。

pub mod errors;
pub mod todo;

pub use errors::*;
pub use todo::*;
