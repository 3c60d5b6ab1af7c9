use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::{Form, FormRejection};
use tracing::{info, warn};

use crate::{
    handlers::{
        models::{
            ActionRequest,
            production::{ListResponse, UpdateResponse},
        },
        form_or_default, parse_action,
    },
    models::{clock, production::TaskAction},
    state::AppState,
};

pub async fn list(State(state): State<AppState>) -> Json<ListResponse> {
    let tasks = state.store.all_tasks().await;
    Json(ListResponse { tasks })
}

pub async fn update(
    State(state): State<AppState>,
    Path(task_id): Path<u32>,
    payload: Result<Form<ActionRequest>, FormRejection>,
) -> Json<UpdateResponse> {
    let payload: ActionRequest = form_or_default(payload);
    let action = parse_action::<TaskAction>(payload.action());
    let result = state
        .store
        .update_task(task_id, action, clock::now())
        .await;
    match &result {
        Ok(task) => info!(
            "task({}): action {:?} applied, status is now {:?}, progress {}",
            task_id, action, task.status, task.progress
        ),
        Err(e) => warn!("task({}): update rejected, {}", task_id, e),
    }
    Json(result.into())
}
