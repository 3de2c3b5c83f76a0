//! # TodoList API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## レスポンス方針
//!
//! | エラー種別 | HTTP ステータス | ボディ |
//! |-----------|----------------|--------|
//! | `NotFound` | 404 Not Found | なし |
//! | `InvalidBody` | 400 Bad Request | RFC 9457 Problem Details |
//! | `Store` | 500 Internal Server Error | RFC 9457 Problem Details（詳細は固定文言） |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todolist_domain::todo::TodoId;
use todolist_shared::ErrorResponse;

/// TodoList API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 指定された ID の Todo アイテムが存在しない
    #[error("Todo アイテムが見つかりません: {0}")]
    NotFound(TodoId),

    /// リクエストボディのバインディング失敗
    #[error("リクエストボディが不正です: {0}")]
    InvalidBody(String),

    /// ストアエラー
    #[error("ストアエラー: {0}")]
    Store(#[from] todolist_infra::InfraError),
}

impl From<JsonRejection> for ApiError {
    /// ボディのバインディング失敗を 400 用のエラーに変換する
    ///
    /// JSON 構文エラー・型不一致・Content-Type 不正のいずれも同じ扱いとする。
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation_error(detail)),
            )
                .into_response(),
            ApiError::Store(e) => {
                tracing::error!("ストアエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal_error()),
                )
                    .into_response()
            }
        }
    }
}
