//! # インフラ層エラー定義
//!
//! ストアへのアクセス中に発生する例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **実装からの独立**: トレイトの戻り値型として使うため、特定のストア実装に
//!   依存しない語彙で定義する

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// リポジトリ操作の失敗を表現する。API 層でこのエラーを受け取り、
/// 適切な HTTP レスポンスに変換する。
///
/// インメモリ実装は失敗しないため現状このエラーを返す経路はないが、
/// リポジトリトレイトの戻り値型として永続ストアへの差し替え口を確保する。
#[derive(Debug, Error)]
pub enum InfraError {
    /// 予期しないエラー
    ///
    /// ストア実装の内部で分類不能な失敗が発生した場合に使用する。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}
