use std::str::FromStr;

use axum::{
    Router,
    routing::{get, post},
};
use axum_extra::extract::{Form, FormRejection};
use tracing::debug;

use crate::{models::UnknownAction, state::AppState};

pub mod dashboard;
pub mod equipment;
pub mod models;
pub mod production;
pub mod quality;

pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(dashboard::index))
        .route("/production", get(production::list))
        .route("/quality", get(quality::list))
        .route("/equipment", get(equipment::list));
    let actions = Router::new()
        .route("/production/update/{task_id}", post(production::update))
        .route("/quality/add", post(quality::add))
        .route("/equipment/update/{equipment_id}", post(equipment::update));
    let api = Router::new()
        .route("/api/dashboard-stats", get(dashboard::index))
        .route("/api/production-stats", get(dashboard::production_stats))
        .route("/api/quality-stats", get(dashboard::quality_stats))
        .route("/api/equipment-stats", get(dashboard::equipment_stats));

    Router::new()
        .merge(pages)
        .merge(actions)
        .merge(api)
        .with_state(state)
}

/// Missing or unrecognised actions yield `None`, which the store treats as a no-op.
fn parse_action<A>(raw: Option<&str>) -> Option<A>
where
    A: FromStr<Err = UnknownAction>,
{
    match raw?.parse() {
        Ok(action) => Some(action),
        Err(UnknownAction(name)) => {
            debug!("ignoring unrecognised action {:?}", name);
            None
        }
    }
}

/// An unreadable form body is treated as an empty one.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(payload)) => payload,
        Err(e) => {
            debug!("treating unreadable form body as empty: {}", e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::models::{production::TaskAction, store::RecordStore};

    fn app() -> (Router, AppState) {
        let state = AppState::new(RecordStore::seeded(), "Li Si");
        (router(state.clone()), state)
    }

    async fn call(router: &Router, method: &str, uri: &str, form: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header("content-type", "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };
        let resp = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[test]
    fn parse_action_tolerates_garbage() {
        assert_eq!(parse_action::<TaskAction>(Some("pause")), Some(TaskAction::Pause));
        assert_eq!(parse_action::<TaskAction>(Some("launch")), None);
        assert_eq!(parse_action::<TaskAction>(None), None);
    }

    #[tokio::test]
    async fn seeded_dashboard() {
        let (router, _) = app();
        let expected = json!({
            "production": {"total": 2, "completed": 0, "in_progress": 0, "completion_rate": 0.0},
            "quality": {"total": 1, "qualified": 1, "unqualified": 0, "qualification_rate": 100.0},
            "equipment": {"total": 2, "running": 1, "maintenance": 0}
        });

        let (status, body) = call(&router, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);

        let (_, body) = call(&router, "GET", "/api/dashboard-stats", None).await;
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn start_then_complete_task() {
        let (router, _) = app();
        let (status, body) = call(&router, "POST", "/production/update/1", Some("action=start")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["task"]["status"], "in_progress");
        assert_eq!(body["task"]["progress"], 10);
        assert!(body["task"]["end_time"].is_null());
        assert!(body.get("message").is_none());

        let (_, body) = call(&router, "POST", "/production/update/1", Some("action=complete")).await;
        let task = &body["task"];
        assert_eq!(task["status"], "completed");
        assert_eq!(task["progress"], 100);
        let start = task["start_time"].as_str().unwrap();
        let end = task["end_time"].as_str().unwrap();
        assert_eq!(start.len(), "YYYY-MM-DD HH:MM:SS".len());
        assert!(start <= end);

        let (_, body) = call(&router, "GET", "/api/production-stats", None).await;
        assert_eq!(body["completed"], 1);
        assert_eq!(body["completion_rate"], 50.0);
        assert_eq!(body["pending"], 1);
    }

    #[tokio::test]
    async fn reset_task() {
        let (router, _) = app();
        call(&router, "POST", "/production/update/2", Some("action=start")).await;
        let (_, body) = call(&router, "POST", "/production/update/2", Some("action=reset")).await;
        assert_eq!(body["task"]["status"], "not_started");
        assert_eq!(body["task"]["progress"], 0);
        assert!(body["task"]["start_time"].is_null());
        assert!(body["task"]["end_time"].is_null());
    }

    #[tokio::test]
    async fn missing_task_is_reported_in_body() {
        let (router, state) = app();
        let before = state.store.all_tasks().await;
        let (status, body) = call(&router, "POST", "/production/update/999", Some("action=start")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "message": "task not found"}));
        assert_eq!(state.store.all_tasks().await, before);
    }

    #[tokio::test]
    async fn unknown_action_returns_task_unchanged() {
        let (router, state) = app();
        let before = serde_json::to_value(state.store.find_task(1).await.unwrap()).unwrap();
        let (_, body) = call(&router, "POST", "/production/update/1", Some("action=launch")).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["task"], before);

        let (_, body) = call(&router, "POST", "/production/update/1", Some("")).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["task"], before);
    }

    #[tokio::test]
    async fn bodyless_update_still_answers_in_body() {
        let (router, state) = app();
        let before = state.store.all_tasks().await;
        let (status, body) = call(&router, "POST", "/production/update/999", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "message": "task not found"}));
        assert_eq!(state.store.all_tasks().await, before);

        let (status, body) = call(&router, "POST", "/production/update/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["task"]["status"], "not_started");

        let (status, body) = call(&router, "POST", "/equipment/update/42", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "message": "equipment not found"}));
    }

    #[tokio::test]
    async fn repeated_action_uses_first_value() {
        let (router, _) = app();
        let (status, body) =
            call(&router, "POST", "/production/update/1", Some("action=start&action=pause")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"]["status"], "in_progress");
        assert_eq!(body["task"]["progress"], 10);

        let (status, body) =
            call(&router, "POST", "/equipment/update/2", Some("action=repair&action=standby")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["equipment"]["status"], "running");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let (router, _) = app();
        let (status, _) = call(&router, "POST", "/production/update/abc", Some("action=start")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_quality_record() {
        let (router, state) = app();
        let form = "product=Product+B&batch=Batch+002&inspector=Wang+Wu&result=unqualified\
                    &defects%5B%5D=scratch&defects%5B%5D=dent";
        let (status, body) = call(&router, "POST", "/quality/add", Some(form)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let record = &body["record"];
        assert_eq!(record["id"], 2);
        assert_eq!(record["product"], "Product B");
        assert_eq!(record["result"], "unqualified");
        assert_eq!(record["defects"], json!(["scratch", "dent"]));
        assert_eq!(record["check_time"].as_str().unwrap().len(), "YYYY-MM-DD HH:MM".len());
        assert_eq!(state.store.all_quality().await.len(), 2);

        let (_, body) = call(&router, "GET", "/quality", None).await;
        assert_eq!(body["records"].as_array().unwrap().len(), 2);
        assert_eq!(body["stats"]["unqualified"], 1);
        assert_eq!(body["stats"]["qualification_rate"], 50.0);
    }

    #[tokio::test]
    async fn add_quality_record_accepts_empty_form() {
        let (router, _) = app();
        let (_, body) = call(&router, "POST", "/quality/add", Some("")).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["record"]["id"], 2);
        assert_eq!(body["record"]["product"], "");
        assert_eq!(body["record"]["defects"], json!([]));
    }

    #[tokio::test]
    async fn add_quality_record_without_body() {
        let (router, state) = app();
        let (status, body) = call(&router, "POST", "/quality/add", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["record"]["id"], 2);
        assert_eq!(body["record"]["result"], "unqualified");
        assert_eq!(state.store.all_quality().await.len(), 2);
    }

    #[tokio::test]
    async fn add_quality_record_merges_defect_keys() {
        let (router, _) = app();
        let (status, body) =
            call(&router, "POST", "/quality/add", Some("defects=a&defects%5B%5D=b")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["record"]["defects"], json!(["b", "a"]));
    }

    #[tokio::test]
    async fn add_quality_record_keeps_first_repeated_value() {
        let (router, _) = app();
        let form = "product=a&product=b&result=qualified&result=unqualified";
        let (status, body) = call(&router, "POST", "/quality/add", Some(form)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["record"]["product"], "a");
        assert_eq!(body["record"]["result"], "qualified");
    }

    #[tokio::test]
    async fn equipment_maintenance_then_repair() {
        let (router, _) = app();
        let (_, body) = call(&router, "POST", "/equipment/update/1", Some("action=maintenance")).await;
        assert_eq!(body["success"], true);
        let equipment = &body["equipment"];
        assert_eq!(equipment["status"], "under_maintenance");
        let records = equipment["maintenance_records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "routine");
        assert_eq!(records[0]["technician"], "Li Si");
        assert_eq!(records[0]["date"], equipment["last_maintenance"]);

        let (_, body) = call(&router, "GET", "/api/equipment-stats", None).await;
        assert_eq!(body, json!({"total": 2, "running": 0, "maintenance": 1, "standby": 1}));

        let (_, body) = call(&router, "POST", "/equipment/update/1", Some("action=repair")).await;
        assert_eq!(body["equipment"]["status"], "running");
        assert_eq!(body["equipment"]["maintenance_records"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_equipment_is_reported_in_body() {
        let (router, _) = app();
        let (status, body) = call(&router, "POST", "/equipment/update/42", Some("action=standby")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "message": "equipment not found"}));
    }

    #[tokio::test]
    async fn listings() {
        let (router, _) = app();
        let (_, body) = call(&router, "GET", "/production", None).await;
        assert_eq!(body["tasks"].as_array().unwrap().len(), 2);
        let (_, body) = call(&router, "GET", "/equipment", None).await;
        assert_eq!(body["equipment"][1]["status"], "standby");
        assert_eq!(body["equipment"][0]["next_maintenance"], "2024-02-10");
        let (_, body) = call(&router, "GET", "/api/quality-stats", None).await;
        assert_eq!(body["qualification_rate"], 100.0);
    }
}
