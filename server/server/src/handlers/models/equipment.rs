use serde::Serialize;

use crate::models::{equipment::Equipment, store};

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Equipment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<store::Result<Equipment>> for UpdateResponse {
    fn from(result: store::Result<Equipment>) -> Self {
        match result {
            Ok(equipment) => Self {
                success: true,
                equipment: Some(equipment),
                message: None,
            },
            Err(e) => Self {
                success: false,
                equipment: None,
                message: Some(e.to_string()),
            },
        }
    }
}
