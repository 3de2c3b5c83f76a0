//! # リポジトリ実装
//!
//! ストア操作の抽象インターフェースとその実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: 呼び出し側はトレイトにのみ依存する
//! - **ストア抽象化**: キー採番や走査順などストア固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod todo_repository;

pub use todo_repository::{InMemoryTodoRepository, TodoRepository};
