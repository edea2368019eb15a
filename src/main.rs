use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use mimalloc::MiMalloc;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};
use wyrmsnake::wire::GameRequest;
use wyrmsnake_core::driver::decide;
use wyrmsnake_core::{Board, Move};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Shared across requests only for the move counter used in diagnostics;
/// the engine itself is stateless, so unlike a persistent-board server
/// there is no per-game snake-id map to keep around.
#[derive(Default)]
struct AppState {
    moves_served: AtomicU64,
}

type SharedState = Arc<AppState>;

fn decode_board(mut text: String) -> color_eyre::Result<Board> {
    let parsed: GameRequest = unsafe { simd_json::serde::from_str(&mut text) }?;
    let board = Board::new(parsed.into_board_input())?;
    Ok(board)
}

async fn get_move(State(state): State<SharedState>, body: String) -> Json<Value> {
    let mv = match decode_board(body) {
        Ok(mut board) => {
            let decision = decide(&mut board);
            state.moves_served.fetch_add(1, Ordering::Relaxed);
            decision.mv
        }
        Err(err) => {
            error!(error = %err, "failed to decode move request; falling back to a safe default");
            Move::Up
        }
    };
    Json(json!({ "move": mv.name() }))
}

async fn info() -> Json<Value> {
    Json(json!({
        "apiversion": "1",
        "author": "Nereuxofficial",
        "color": "#888888",
        "head": "default",
        "tail": "default",
    }))
}

async fn start(body: String) -> Response {
    match serde_json::from_str::<GameRequest>(&body) {
        Ok(game) => info!(game_id = %game.game.id, snakes = game.board.snakes.len(), "game started"),
        Err(err) => warn!(error = %err, "couldn't parse /start body, continuing anyway"),
    }
    Response::default()
}

async fn end(body: String) -> Response {
    match serde_json::from_str::<GameRequest>(&body) {
        Ok(game) => info!(game_id = %game.game.id, "game ended"),
        Err(err) => warn!(error = %err, "couldn't parse /end body, continuing anyway"),
    }
    Response::default()
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let state: SharedState = Arc::new(AppState::default());
    info!("Hello Snakes!");

    let app = Router::new()
        .route("/", get(info))
        .route("/move", post(get_move))
        .route("/info", get(info))
        .route("/start", post(start))
        .route("/end", post(end))
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!(%port, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_real_move_request() {
        let body = r##"{"game":{"id":"203cd476-bd6f-4c20-8021-b222043f16e5"},"turn":0,"board":{"height":11,"width":11,"snakes":[{"id":"gs_vKjjkVGxJpQchxG6tYMwQHCV","health":100,"body":[{"x":5,"y":1},{"x":5,"y":1},{"x":5,"y":1}],"head":{"x":5,"y":1},"length":3}],"food":[{"x":10,"y":4}]},"you":{"id":"gs_vKjjkVGxJpQchxG6tYMwQHCV","health":100,"body":[{"x":5,"y":1},{"x":5,"y":1},{"x":5,"y":1}],"head":{"x":5,"y":1},"length":3}}"##;
        let board = decode_board(body.to_string()).unwrap();
        assert_eq!(board.snakes[0].length, 3);
    }

    #[test]
    fn rejects_malformed_body_without_panicking() {
        assert!(decode_board("not json".to_string()).is_err());
    }
}
