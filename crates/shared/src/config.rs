use std::env;
use std::str::FromStr;

use thiserror::Error;

/// アプリケーション設定
///
/// 環境変数から読み込み、未設定の項目はローカル開発用の既定値で補います。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP の待ち受けポート
    pub port: u16,
    pub database: DatabaseConfig,
}

/// ストア（MySQL）への接続設定
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// プールの最大接続数
    pub pool_size: u32,
}

// パスワードをログへ出さないため手動実装
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

/// 設定読み込みのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てます（テストではプロセス環境を汚さずに使う）。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pool_size: u32 = parse_or(&lookup, "DB_POOL_SIZE", 10)?;
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_POOL_SIZE".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", 3000)?,
            database: DatabaseConfig {
                host: lookup("DB_HOST").unwrap_or_else(|| "database".to_string()),
                port: parse_or(&lookup, "DB_PORT", 3306)?,
                user: lookup("DB_USER").unwrap_or_else(|| "app_user".to_string()),
                password: lookup("DB_PASSWORD").unwrap_or_else(|| "app_pass".to_string()),
                name: lookup("DB_NAME").unwrap_or_else(|| "app_db".to_string()),
                pool_size,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
