//! # Todo アイテムハンドラ
//!
//! Todo アイテムの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /` - サンプルアイテム（ストアにはアクセスしない）
//! - `GET /todoitems` - 全件一覧
//! - `GET /todoitems/complete` - 完了済み一覧
//! - `GET /todoitems/{id}` - 1 件取得
//! - `POST /todoitems` - 新規作成
//! - `PUT /todoitems/{id}` - 名前と完了フラグの上書き
//! - `DELETE /todoitems/{id}` - 削除（削除したアイテムを返す）
//!
//! ## 公開表現
//!
//! レスポンスは常に [`TodoItemDto`]（`id` / `name` / `isComplete`）で返す。
//! レコード内部の `secret` フィールドは DTO に存在しないため、
//! どのエンドポイントでもシリアライズされない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todolist_domain::todo::{NewTodo, Todo, TodoId};
use todolist_infra::repository::TodoRepository;
use todolist_shared::ErrorResponse;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Todo API の共有状態
pub struct TodoState {
    pub todo_repository: Arc<dyn TodoRepository>,
}

// --- リクエスト/レスポンス型 ---

/// Todo アイテムの公開表現 DTO
///
/// リクエストボディとレスポンスの両方で使用する。
/// バインディングは構造のみを検証する: 欠損フィールドはデフォルト値で補い、
/// 未知のフィールドは無視し、型不一致は拒否する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    /// アイテムの ID（作成リクエストでは無視され、ストアが採番する）
    #[serde(default)]
    pub id:          i32,
    /// タスク名
    #[serde(default)]
    pub name:        Option<String>,
    /// 完了フラグ
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItemDto {
    /// レコードを公開表現へ変換する
    ///
    /// `secret` は DTO にフィールドがないため、この変換で必ず落ちる。
    pub fn from_record(todo: &Todo) -> Self {
        Self {
            id:          todo.id().as_i32(),
            name:        todo.name().map(|s| s.to_string()),
            is_complete: todo.is_complete(),
        }
    }
}

// --- ハンドラ ---

/// GET /
///
/// 固定のサンプルアイテムを返す。ストアにはアクセスしないため、
/// `id` は未採番を表す 0 のまま。
#[utoipa::path(
    get,
    path = "/",
    tag = "todoitems",
    responses(
        (status = 200, description = "サンプル Todo アイテム", body = TodoItemDto)
    )
)]
pub async fn sample_todo() -> Json<TodoItemDto> {
    Json(TodoItemDto {
        id:          0,
        name:        Some("Walk dog".to_string()),
        is_complete: false,
    })
}

/// GET /todoitems
///
/// 全 Todo アイテムを ID 昇順で取得する。
#[utoipa::path(
    get,
    path = "/todoitems",
    tag = "todoitems",
    responses(
        (status = 200, description = "Todo アイテム一覧", body = [TodoItemDto])
    )
)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.todo_repository.find_all().await?;

    let items: Vec<TodoItemDto> = todos.iter().map(TodoItemDto::from_record).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// GET /todoitems/complete
///
/// 完了済みの Todo アイテムを ID 昇順で取得する。
#[utoipa::path(
    get,
    path = "/todoitems/complete",
    tag = "todoitems",
    responses(
        (status = 200, description = "完了済み Todo アイテム一覧", body = [TodoItemDto])
    )
)]
pub async fn list_complete_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.todo_repository.find_completed().await?;

    let items: Vec<TodoItemDto> = todos.iter().map(TodoItemDto::from_record).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// GET /todoitems/{id}
///
/// 指定 ID の Todo アイテムを取得する。
#[utoipa::path(
    get,
    path = "/todoitems/{id}",
    tag = "todoitems",
    params(
        ("id" = i32, Path, description = "Todo アイテムの ID")
    ),
    responses(
        (status = 200, description = "Todo アイテム", body = TodoItemDto),
        (status = 404, description = "指定 ID のアイテムが存在しない")
    )
)]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let id = TodoId::from_i32(id);

    let todo = state
        .todo_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok((StatusCode::OK, Json(TodoItemDto::from_record(&todo))))
}

/// POST /todoitems
///
/// Todo アイテムを新規作成する。ボディの `id` は無視され、ストアが採番する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたアイテム（`Location` ヘッダー付き）
/// - `400 Bad Request`: ボディのバインディング失敗
#[utoipa::path(
    post,
    path = "/todoitems",
    tag = "todoitems",
    request_body = TodoItemDto,
    responses(
        (status = 201, description = "作成された Todo アイテム", body = TodoItemDto,
            headers(
                ("Location" = String, description = "作成されたアイテムの URL")
            )),
        (status = 400, description = "リクエストボディが不正", body = ErrorResponse)
    )
)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    body: Result<Json<TodoItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = body?;

    let todo = state
        .todo_repository
        .insert(NewTodo {
            name:        dto.name,
            is_complete: dto.is_complete,
        })
        .await?;
    state.todo_repository.flush().await?;

    let location = format!("/todoitems/{}", todo.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemDto::from_record(&todo)),
    ))
}

/// PUT /todoitems/{id}
///
/// 指定 ID のアイテムの名前と完了フラグを上書きする。
/// `id` と内部フィールドは変更されない。
///
/// ## レスポンス
///
/// - `204 No Content`: 更新成功（ボディなし）
/// - `400 Bad Request`: ボディのバインディング失敗
/// - `404 Not Found`: 指定 ID のアイテムが存在しない
#[utoipa::path(
    put,
    path = "/todoitems/{id}",
    tag = "todoitems",
    params(
        ("id" = i32, Path, description = "Todo アイテムの ID")
    ),
    request_body = TodoItemDto,
    responses(
        (status = 204, description = "更新成功"),
        (status = 400, description = "リクエストボディが不正", body = ErrorResponse),
        (status = 404, description = "指定 ID のアイテムが存在しない")
    )
)]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
    body: Result<Json<TodoItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // バインディング失敗は存在確認より先に 400 とする
    let Json(dto) = body?;
    let id = TodoId::from_i32(id);

    let mut todo = state
        .todo_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    todo.update(dto.name, dto.is_complete);
    state.todo_repository.update(&todo).await?;
    state.todo_repository.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todoitems/{id}
///
/// 指定 ID のアイテムを削除し、削除したアイテムを返す。
#[utoipa::path(
    delete,
    path = "/todoitems/{id}",
    tag = "todoitems",
    params(
        ("id" = i32, Path, description = "Todo アイテムの ID")
    ),
    responses(
        (status = 200, description = "削除された Todo アイテム", body = TodoItemDto),
        (status = 404, description = "指定 ID のアイテムが存在しない")
    )
)]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let id = TodoId::from_i32(id);

    let todo = state
        .todo_repository
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    state.todo_repository.flush().await?;

    Ok((StatusCode::OK, Json(TodoItemDto::from_record(&todo))))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_dtoはcamel_caseの3フィールドでシリアライズされる() {
        let dto = TodoItemDto {
            id:          1,
            name:        Some("Buy milk".to_string()),
            is_complete: false,
        };
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Buy milk",
                "isComplete": false
            })
        );
    }

    #[test]
    fn test_名前なしはnullでシリアライズされる() {
        let dto = TodoItemDto {
            id:          1,
            name:        None,
            is_complete: true,
        };
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["name"], serde_json::Value::Null);
    }

    #[rstest]
    #[case::空オブジェクト("{}", 0, None, false)]
    #[case::idのみ(r#"{"id": 5}"#, 5, None, false)]
    #[case::全フィールド(r#"{"id": 2, "name": "Walk dog", "isComplete": true}"#, 2, Some("Walk dog"), true)]
    #[case::未知フィールドは無視(r#"{"name": "x", "unknown": 1}"#, 0, Some("x"), false)]
    fn test_デシリアライズは欠損フィールドをデフォルト値で補う(
        #[case] json: &str,
        #[case] expected_id: i32,
        #[case] expected_name: Option<&str>,
        #[case] expected_complete: bool,
    ) {
        let dto: TodoItemDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.id, expected_id);
        assert_eq!(dto.name.as_deref(), expected_name);
        assert_eq!(dto.is_complete, expected_complete);
    }

    #[test]
    fn test_型不一致のデシリアライズは失敗する() {
        let result = serde_json::from_str::<TodoItemDto>(r#"{"isComplete": "yes"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_from_recordはsecretを持ち込まない() {
        let todo = Todo::from_store(
            TodoId::from_i32(9),
            Some("Walk dog".to_string()),
            true,
            Some("hidden".to_string()),
        );

        let dto = TodoItemDto::from_record(&todo);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 9,
                "name": "Walk dog",
                "isComplete": true
            })
        );
    }
}
