//! # Todo アイテム
//!
//! Todo リストの 1 項目を表すドメインモデル。
//!
//! ## 設計判断
//!
//! ### Newtype パターンの採用
//!
//! `TodoId` は `i32` をラップした Newtype である。これにより:
//!
//! - 型安全性: 素の整数と混同しない
//! - コンパイル時検証: 引数の取り違えをコンパイラが検出
//! - ゼロコスト: 実行時のオーバーヘッドなし
//!
//! ### 採番の方針
//!
//! ID はストアが挿入時に採番する（1 始まりの連番）。そのため `TodoId` に
//! 新規生成のコンストラクタはなく、既存値からの復元のみを提供する。
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::todo::{Todo, TodoId};
//!
//! // ストアから取得した値を復元
//! let todo = Todo::from_store(TodoId::from_i32(1), Some("Walk dog".to_string()), false, None);
//! assert_eq!(todo.id().as_i32(), 1);
//! assert!(!todo.is_complete());
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Todo アイテムの一意識別子
///
/// ストアが挿入時に採番する連番。一度削除された ID が再利用されることはない。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
pub struct TodoId(i32);

impl TodoId {
    /// 既存の整数値から Todo ID を作成する
    ///
    /// ストアから取得した値や、リクエストパスの値を型安全な `TodoId` に
    /// 変換する際に使用する。
    ///
    /// # 例
    ///
    /// ```rust
    /// use todolist_domain::todo::TodoId;
    ///
    /// let id = TodoId::from_i32(42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    pub fn from_i32(id: i32) -> Self {
        Self(id)
    }

    /// 内部の整数値を取得する
    ///
    /// レスポンスへの変換や Location ヘッダーの組み立て時に使用する。
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

// =========================================================================
// Todo（Todo アイテムエンティティ）
// =========================================================================

/// Todo アイテムエンティティ
///
/// タスク 1 件を表現する。`secret` は内部管理用のフィールドであり、
/// 公開表現への変換（api 層の責務）では常に除外される。
///
/// # 不変条件
///
/// - `id` はストア内で一意
/// - `id` と `secret` は更新操作で変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    name:        Option<String>,
    is_complete: bool,
    secret:      Option<String>,
}

impl Todo {
    /// ストアからレコードを復元する
    pub fn from_store(
        id: TodoId,
        name: Option<String>,
        is_complete: bool,
        secret: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            is_complete,
            secret,
        }
    }

    /// Todo ID を取得する
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// タスク名を取得する
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 完了フラグを取得する
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// 内部管理用フィールドを取得する
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// タスク名と完了フラグを上書きする
    ///
    /// `id` と `secret` は変更されない。
    pub fn update(&mut self, name: Option<String>, is_complete: bool) {
        self.name = name;
        self.is_complete = is_complete;
    }
}

// =========================================================================
// NewTodo（新規作成コマンド）
// =========================================================================

/// 新規 Todo アイテムの作成コマンド
///
/// ID はストアが採番するため含まない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name:        Option<String>,
    pub is_complete: bool,
}
