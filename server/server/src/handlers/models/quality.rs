use serde::{Deserialize, Serialize};

use crate::{
    handlers::models::first,
    models::{
        quality::{InspectionResult, NewQualityRecord, QualityRecord},
        stats::QualityStats,
    },
};

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub records: Vec<QualityRecord>,
    pub stats: QualityStats,
}

/// Every field is optional on the wire; missing text becomes empty and a
/// repeated text key keeps its first value.
#[derive(Debug, Default, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    product: Vec<String>,
    #[serde(default)]
    batch: Vec<String>,
    #[serde(default)]
    inspector: Vec<String>,
    #[serde(default)]
    result: Vec<String>,
    #[serde(default, rename = "defects[]")]
    defects: Vec<String>,
    #[serde(default, rename = "defects")]
    bare_defects: Vec<String>,
}

impl From<AddRequest> for NewQualityRecord {
    fn from(request: AddRequest) -> Self {
        let mut defects = request.defects;
        defects.extend(request.bare_defects);
        Self {
            result: InspectionResult::from_label(&first(request.result)),
            product: first(request.product),
            batch: first(request.batch),
            inspector: first(request.inspector),
            defects,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub success: bool,
    pub record: QualityRecord,
}
