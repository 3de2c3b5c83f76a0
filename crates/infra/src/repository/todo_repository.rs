//! # TodoRepository
//!
//! Todo アイテムの保存・取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **キーの採番**: ID は挿入時にストアが採番する（1 始まりの連番、削除後も
//!   再利用しない）
//! - **走査順の保証**: 一覧取得は常に ID 昇順で返す
//! - **非永続**: インメモリ実装はプロセス終了とともにデータを破棄する

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use todolist_domain::todo::{NewTodo, Todo, TodoId};
use tokio::sync::RwLock;

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo アイテムのストア操作を定義する。
/// インフラ層で具体的な実装を提供し、ハンドラーから利用する。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 新しい Todo アイテムを挿入する
    ///
    /// # 引数
    ///
    /// - `new_todo`: 作成コマンド（ID は含まない）
    ///
    /// # 戻り値
    ///
    /// - `Ok(todo)`: 採番された ID を持つ作成済みレコード
    /// - `Err(_)`: ストアエラー
    async fn insert(&self, new_todo: NewTodo) -> Result<Todo, InfraError>;

    /// ID で Todo アイテムを検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(todo))`: レコードが見つかった場合
    /// - `Ok(None)`: レコードが見つからない場合
    /// - `Err(_)`: ストアエラー
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// 全 Todo アイテムを取得する
    ///
    /// ID 昇順で返す。
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// 完了済みの Todo アイテムを取得する
    ///
    /// 完了フラグが真のレコードのみを ID 昇順で返す。
    async fn find_completed(&self) -> Result<Vec<Todo>, InfraError>;

    /// Todo アイテムを上書き保存する
    ///
    /// `todo.id()` のレコードを丸ごと置き換える。
    /// 対象レコードの存在確認は呼び出し側の責務。
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// ID で Todo アイテムを削除する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(todo))`: 削除されたレコード
    /// - `Ok(None)`: レコードが見つからない場合
    async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// 変更を永続化する
    ///
    /// インメモリ実装では何もしない。永続ストアに差し替えた際の
    /// コミット境界として呼び出し側に明示する。
    async fn flush(&self) -> Result<(), InfraError>;
}

/// ストアの内部状態
///
/// レコード本体と採番カウンターを同一ロック下に置き、
/// 挿入時の「採番 + 格納」を不可分にする。
#[derive(Debug, Default)]
struct StoreInner {
    todos:   BTreeMap<TodoId, Todo>,
    next_id: i32,
}

/// インメモリ実装の TodoRepository
///
/// `BTreeMap` をキー順に走査するため、一覧取得の ID 昇順が自然に保たれる。
/// `Clone` はストアを共有する（独立したコピーを作るわけではない）。
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<StoreInner>>,
}

impl InMemoryTodoRepository {
    /// 新しい空のリポジトリインスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, new_todo: NewTodo) -> Result<Todo, InfraError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = TodoId::from_i32(store.next_id);
        let todo = Todo::from_store(id, new_todo.name, new_todo.is_complete, None);
        store.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let store = self.store.read().await;
        Ok(store.todos.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let store = self.store.read().await;
        Ok(store.todos.values().cloned().collect())
    }

    async fn find_completed(&self) -> Result<Vec<Todo>, InfraError> {
        let store = self.store.read().await;
        Ok(store
            .todos
            .values()
            .filter(|todo| todo.is_complete())
            .cloned()
            .collect())
    }

    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        let mut store = self.store.write().await;
        store.todos.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let mut store = self.store.write().await;
        Ok(store.todos.remove(&id))
    }

    async fn flush(&self) -> Result<(), InfraError> {
        Ok(())
    }
}
