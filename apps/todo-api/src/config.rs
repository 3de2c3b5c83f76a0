//! # TodoList API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// すべての項目にデフォルト値があるため、環境変数なしでも起動できる。
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("TODO_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("TODO_API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("TODO_API_PORT は有効なポート番号である必要があります"),
        })
    }
}
