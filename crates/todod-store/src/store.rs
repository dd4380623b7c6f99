//! The process-wide todo collection behind an exclusive-access guard.
//!
//! All reads and writes go through one [`tokio::sync::RwLock`], so
//! concurrent requests cannot observe a half-applied mutation. Insertion
//! order is preserved for listing.

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{NewTodo, Priority, Todo, TodoPatch, default_due_date};

/// Errors returned by [`TodoStore`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Todo not found")]
    NotFound,
}

/// The shared todo collection. Empty at startup; lives for the lifetime
/// of the process.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every todo in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// Number of live todos.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }

    /// Create a todo and append it to the collection.
    ///
    /// Applies defaults: a missing `due_date` becomes seven days from now,
    /// and a missing or invalid `priority` becomes [`Priority::Medium`].
    pub async fn create(&self, input: NewTodo) -> Todo {
        // An empty due_date counts as absent, same as the original service.
        let due_date = match input.due_date {
            Some(date) if !date.is_empty() => date,
            _ => {
                let date = default_due_date();
                info!("no due_date provided, using default: {date}");
                date
            }
        };

        let priority = match input.priority {
            None => Priority::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("invalid priority {raw:?}, defaulting to {}", Priority::default());
                Priority::default()
            }),
        };

        let todo = Todo {
            id: Uuid::new_v4(),
            title: input.title,
            completed: false,
            due_date,
            priority,
        };

        self.todos.write().await.push(todo.clone());
        info!(
            "created todo {} titled {:?} due {}",
            todo.id, todo.title, todo.due_date
        );
        todo
    }

    /// Apply a partial update to an existing todo.
    ///
    /// `title`, `completed`, and `due_date` overwrite unconditionally when
    /// present. A `priority` that does not parse is discarded and the
    /// prior value kept; clients relying on the fallback never see an
    /// error for it.
    pub async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = due_date;
        }
        if let Some(raw) = patch.priority {
            match raw.parse::<Priority>() {
                Ok(priority) => todo.priority = priority,
                Err(_) => {
                    warn!("invalid priority {raw:?} on update, keeping {}", todo.priority);
                }
            }
        }

        info!("updated todo {id}");
        Ok(todo.clone())
    }

    /// Remove a todo by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() < before {
            info!("deleted todo {id}");
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
