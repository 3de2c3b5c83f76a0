//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Todo API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, todo};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TodoList API",
        version = "0.1.0",
        description = "Todo アイテムを管理する最小構成の CRUD API"
    ),
    paths(
        // health
        health::health_check,
        // todoitems
        todo::sample_todo,
        todo::list_todos,
        todo::list_complete_todos,
        todo::get_todo,
        todo::create_todo,
        todo::update_todo,
        todo::delete_todo,
    ),
    components(schemas(
        todolist_shared::ErrorResponse,
    )),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "todoitems", description = "Todo アイテム管理"),
    )
)]
pub struct ApiDoc;
