//! # TodoList API ライブラリ
//!
//! Todo アイテムの CRUD を提供する API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築と共通レイヤーの適用
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP レスポンスへ変換される API エラー
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI ドキュメント定義

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
