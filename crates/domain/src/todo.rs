use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// ストアが採番する Todo の識別子
///
/// 一度割り当てられた値は変更も再利用もされません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = DomainError;

    /// パスパラメータ由来の文字列を ID として解釈します。
    ///
    /// 整数値を表す数値表記であれば受け付けます（`1.0`、`1e3`、`0x10`、空白のみは 0）。
    /// 小数部を持つ値や数値でない文字列は拒否し、i64 の範囲外は飽和させます
    /// （該当行が存在しないため結果は not found になる）。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTodoId(s.to_string());
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self(0));
        }

        if let Some((radix, digits)) = radix_literal(trimmed) {
            if !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            return match u64::from_str_radix(digits, radix) {
                Ok(value) => Ok(Self(i64::try_from(value).unwrap_or(i64::MAX))),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self(i64::MAX)),
                Err(_) => Err(invalid()),
            };
        }

        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(invalid());
        }
        // f64 -> i64 のキャストは範囲外で飽和する
        Ok(Self(value as i64))
    }
}

/// `0x` / `0o` / `0b` 接頭辞付きの整数表記を基数と数字部に分解
fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// 永続化済みの Todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

/// タイトルの最大文字数（todos.title は VARCHAR(100)）
pub const TITLE_MAX_CHARS: usize = 100;

fn check_title_length(title: &str) -> Result<(), DomainError> {
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(DomainError::TitleTooLong(TITLE_MAX_CHARS));
    }
    Ok(())
}

/// 作成用の検証済み入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
}

impl NewTodo {
    /// タイトルが存在し、空文字列でなく、列の長さに収まることを検証します。
    pub fn new(title: Option<String>) -> Result<Self, DomainError> {
        match title {
            Some(title) if !title.is_empty() => {
                check_title_length(&title)?;
                Ok(Self { title })
            }
            _ => Err(DomainError::MissingTitle),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// 部分更新の内容
///
/// `None` のフィールドはストア側で既存値が維持されます。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl TodoPatch {
    pub fn new(title: Option<String>, done: Option<bool>) -> Result<Self, DomainError> {
        if let Some(title) = title.as_deref() {
            if title.is_empty() {
                return Err(DomainError::EmptyTitle);
            }
            check_title_length(title)?;
        }
        Ok(Self { title, done })
    }
}
