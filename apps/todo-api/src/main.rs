//! # TodoList API サーバー
//!
//! Todo アイテムを管理する最小構成の HTTP API サーバー。
//!
//! ## 役割
//!
//! - **CRUD API**: Todo アイテムの作成・取得・更新・削除
//! - **インメモリ永続化**: プロセス内ストアへの保存（再起動で空に戻る）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` または `pretty`、デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todolist=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todolist-api
//!
//! # 本番環境
//! TODO_API_PORT=8080 LOG_FORMAT=json cargo run -p todolist-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use todolist_api::{app_builder::build_app, config::ApiConfig};
use todolist_infra::repository::{InMemoryTodoRepository, TodoRepository};
use todolist_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// TodoList API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("todo-api");
    todolist_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "todo-api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "TodoList API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存関係の初期化
    // インメモリストアはプロセス内で共有され、再起動で空に戻る
    let todo_repository: Arc<dyn TodoRepository> = Arc::new(InMemoryTodoRepository::new());

    // ルーター構築
    let app = build_app(todo_repository);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("TodoList API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
