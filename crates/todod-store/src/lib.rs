//! In-memory todo storage: the todo model and the guarded collection.

pub mod models;
pub mod store;

pub use models::{NewTodo, Priority, Todo, TodoPatch, default_due_date};
pub use store::{StoreError, TodoStore};
