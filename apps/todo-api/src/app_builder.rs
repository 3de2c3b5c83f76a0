//! # Todo API アプリケーション構築
//!
//! DI（リポジトリ・State）の初期化とルーター構築を担当する。
//! `main.rs` はサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use todolist_infra::repository::TodoRepository;
use todolist_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    TodoState,
    create_todo,
    delete_todo,
    get_todo,
    health_check,
    list_complete_todos,
    list_todos,
    sample_todo,
    update_todo,
};

/// DI コンテナの構築とルーター定義を行う
///
/// リポジトリを受け取り、State → Router の順に組み立てる。
pub fn build_app(todo_repository: Arc<dyn TodoRepository>) -> Router {
    let todo_state = Arc::new(TodoState { todo_repository });

    Router::new()
        .route("/", get(sample_todo))
        .route("/health", get(health_check))
        .route("/todoitems", get(list_todos).post(create_todo))
        // 静的パス `/todoitems/complete` は `/todoitems/{id}` より優先してマッチする
        .route("/todoitems/complete", get(list_complete_todos))
        .route(
            "/todoitems/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(todo_state)
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
