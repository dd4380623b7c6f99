use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use todod_store::{NewTodo, StoreError, TodoPatch, TodoStore};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::not_found("Todo not found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /api/todos`. `title` is optional here so that a missing
/// field can be reported as a client error rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
}

/// Body of `PUT /api/todos/{id}`; any subset of fields may be present.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", axum::routing::put(update_todo).delete(delete_todo))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(store: Arc<TodoStore>, bind: &str, port: u16) -> Result<()> {
    let app = build_router(store);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("todod listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("todod shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> axum::response::Response {
    Json(serde_json::json!({ "status": "healthy" })).into_response()
}

async fn list_todos(State(store): State<Arc<TodoStore>>) -> axum::response::Response {
    let todos = store.list().await;
    tracing::info!("GET /api/todos - returning {} todos", todos.len());
    Json(todos).into_response()
}

async fn create_todo(
    State(store): State<Arc<TodoStore>>,
    body: String,
) -> Result<axum::response::Response, AppError> {
    // The body is parsed by hand so that a missing or unparseable payload
    // gets the same client error as a missing title.
    let request: CreateTodoRequest = serde_json::from_str(&body).map_err(|_| {
        tracing::warn!("POST /api/todos - missing or unparseable body");
        AppError::bad_request("Title is required")
    })?;

    let Some(title) = request.title else {
        tracing::warn!("POST /api/todos - missing title in request");
        return Err(AppError::bad_request("Title is required"));
    };

    let todo = store
        .create(NewTodo {
            title,
            due_date: request.due_date,
            priority: request.priority,
        })
        .await;

    Ok((StatusCode::CREATED, Json(todo)).into_response())
}

async fn update_todo(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<String>,
    body: String,
) -> Result<axum::response::Response, AppError> {
    let request: UpdateTodoRequest = serde_json::from_str(&body)
        .map_err(|_| AppError::bad_request("Invalid request body"))?;

    // Ids are opaque tokens to clients; a malformed one is simply unknown.
    let id = parse_id(&id)?;

    let todo = store
        .update(
            id,
            TodoPatch {
                title: request.title,
                completed: request.completed,
                due_date: request.due_date,
                priority: request.priority,
            },
        )
        .await?;

    Ok(Json(todo).into_response())
}

async fn delete_todo(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<String>,
) -> Result<axum::response::Response, AppError> {
    let id = parse_id(&id)?;
    store.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Todo deleted" })).into_response())
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found("Todo not found"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
