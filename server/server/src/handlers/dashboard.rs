use axum::{Json, extract::State};

use crate::{
    models::stats::{DashboardStats, EquipmentDetail, ProductionDetail, QualityStats},
    state::AppState,
};

pub async fn index(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(state.store.dashboard_stats().await)
}

pub async fn production_stats(State(state): State<AppState>) -> Json<ProductionDetail> {
    Json(state.store.production_detail().await)
}

pub async fn quality_stats(State(state): State<AppState>) -> Json<QualityStats> {
    Json(state.store.quality_stats().await)
}

pub async fn equipment_stats(State(state): State<AppState>) -> Json<EquipmentDetail> {
    Json(state.store.equipment_detail().await)
}
