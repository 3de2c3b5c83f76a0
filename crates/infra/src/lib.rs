//! # TodoList インフラ層
//!
//! データストアへのアクセスを担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトとその具体実装を提供する。
//! ストアの詳細をカプセル化し、呼び出し側をストアの変更から保護する。
//!
//! ## 責務
//!
//! - **リポジトリトレイト**: ストア操作の抽象インターフェース
//! - **インメモリ実装**: プロセス内に閉じた非永続ストア
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::todo::NewTodo;
//! use todolist_infra::repository::{InMemoryTodoRepository, TodoRepository};
//!
//! async fn setup() -> Result<(), todolist_infra::InfraError> {
//!     let repository = InMemoryTodoRepository::new();
//!     let todo = repository
//!         .insert(NewTodo {
//!             name:        Some("Walk dog".to_string()),
//!             is_complete: false,
//!         })
//!         .await?;
//!     assert_eq!(todo.id().as_i32(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod repository;

pub use error::InfraError;
