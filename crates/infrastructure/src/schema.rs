//! todos テーブルの定義と初期データ

pub const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INT AUTO_INCREMENT PRIMARY KEY,
        title VARCHAR(100) NOT NULL,
        done TINYINT DEFAULT 0
    )
"#;

/// テーブルが空のときだけ投入するサンプル行（title, done）
pub const SEED_TODOS: [(&str, bool); 2] = [("first task", false), ("practice ops tooling", true)];
