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
            equipment::{ListResponse, UpdateResponse},
        },
        form_or_default, parse_action,
    },
    models::{clock, equipment::EquipmentAction},
    state::AppState,
};

pub async fn list(State(state): State<AppState>) -> Json<ListResponse> {
    let equipment = state.store.all_equipment().await;
    Json(ListResponse { equipment })
}

pub async fn update(
    State(state): State<AppState>,
    Path(equipment_id): Path<u32>,
    payload: Result<Form<ActionRequest>, FormRejection>,
) -> Json<UpdateResponse> {
    let payload: ActionRequest = form_or_default(payload);
    let action = parse_action::<EquipmentAction>(payload.action());
    let result = state
        .store
        .update_equipment(equipment_id, action, clock::today(), &state.technician)
        .await;
    match &result {
        Ok(equipment) => info!(
            "equipment({}): action {:?} applied, status is now {:?}",
            equipment_id, action, equipment.status
        ),
        Err(e) => warn!("equipment({}): update rejected, {}", equipment_id, e),
    }
    Json(result.into())
}
