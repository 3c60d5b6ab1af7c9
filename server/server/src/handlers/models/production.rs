use serde::Serialize;

use crate::models::{production::ProductionTask, store};

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub tasks: Vec<ProductionTask>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<ProductionTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<store::Result<ProductionTask>> for UpdateResponse {
    fn from(result: store::Result<ProductionTask>) -> Self {
        match result {
            Ok(task) => Self {
                success: true,
                task: Some(task),
                message: None,
            },
            Err(e) => Self {
                success: false,
                task: None,
                message: Some(e.to_string()),
            },
        }
    }
}
