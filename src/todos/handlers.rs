//! HTTP handlers for the todo UI.
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;

use crate::shared::state::AppState;
use crate::todos::{views, StoreError};

#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub title: String,
    pub desc: String,
}

fn store_error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/show", get(show))
        .route("/update/:sno", get(edit).post(update))
        .route("/delete/:sno", get(delete))
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    match state.store.list_all().await {
        Ok(todos) => Ok(Html(views::render_index(&todos))),
        Err(e) => {
            error!("Failed to list todos: {}", e);
            Err(store_error_status(&e))
        }
    }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TodoForm>,
) -> Result<Redirect, StatusCode> {
    match state.store.create(&form.title, &form.desc).await {
        Ok(todo) => {
            info!("Created todo {}", todo);
            Ok(Redirect::to("/"))
        }
        Err(e) => {
            error!("Failed to create todo: {}", e);
            Err(store_error_status(&e))
        }
    }
}

/// Diagnostic endpoint: logs every stored todo and returns a plain
/// confirmation instead of a rendered page.
pub async fn show(State(state): State<Arc<AppState>>) -> Result<String, StatusCode> {
    match state.store.list_all().await {
        Ok(todos) => {
            for todo in &todos {
                info!("{}", todo);
            }
            Ok("This is products page".to_string())
        }
        Err(e) => {
            error!("Failed to list todos: {}", e);
            Err(store_error_status(&e))
        }
    }
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(sno): Path<i32>,
) -> Result<Html<String>, StatusCode> {
    match state.store.get(sno).await {
        Ok(todo) => Ok(Html(views::render_update(&todo))),
        Err(e) => {
            error!("Failed to fetch todo {}: {}", sno, e);
            Err(store_error_status(&e))
        }
    }
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(sno): Path<i32>,
    Form(form): Form<TodoForm>,
) -> Result<Redirect, StatusCode> {
    match state.store.update(sno, &form.title, &form.desc).await {
        Ok(todo) => {
            info!("Updated todo {}", todo);
            Ok(Redirect::to("/"))
        }
        Err(e) => {
            error!("Failed to update todo {}: {}", sno, e);
            Err(store_error_status(&e))
        }
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(sno): Path<i32>,
) -> Result<Redirect, StatusCode> {
    match state.store.delete(sno).await {
        Ok(()) => {
            info!("Deleted todo {}", sno);
            Ok(Redirect::to("/"))
        }
        Err(e) => {
            error!("Failed to delete todo {}: {}", sno, e);
            Err(store_error_status(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            store_error_status(&StoreError::NotFound),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_other_errors_map_to_500() {
        assert_eq!(
            store_error_status(&StoreError::Validation("title must not be empty".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            store_error_status(&StoreError::Pool("timed out".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
