//! # TodoList ドメイン層
//!
//! Todo アイテムのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: Todo）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: TodoId）
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はワークスペース内の他クレートに依存しない。これにより、
//! データモデルの純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`todo`] - Todo エンティティと識別子
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::todo::{NewTodo, TodoId};
//!
//! let id = TodoId::from_i32(1);
//! let new_todo = NewTodo {
//!     name:        Some("Walk dog".to_string()),
//!     is_complete: false,
//! };
//! assert_eq!(id.as_i32(), 1);
//! ```

pub mod todo;

pub use todo::{NewTodo, Todo, TodoId};
