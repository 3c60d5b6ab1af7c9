use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionResult {
    Qualified,
    Unqualified,
}

impl InspectionResult {
    /// Anything that is not a recognised pass label counts as unqualified.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "qualified" | "Qualified" | "pass" | "合格" => Self::Qualified,
            _ => Self::Unqualified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRecord {
    pub id: u32,
    pub product: String,
    pub batch: String,
    pub inspector: String,
    #[serde(with = "clock::minutes")]
    pub check_time: NaiveDateTime,
    pub result: InspectionResult,
    pub defects: Vec<String>,
}

/// A quality record before the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewQualityRecord {
    pub product: String,
    pub batch: String,
    pub inspector: String,
    pub result: InspectionResult,
    pub defects: Vec<String>,
}

impl NewQualityRecord {
    pub fn into_record(self, id: u32, check_time: NaiveDateTime) -> QualityRecord {
        QualityRecord {
            id,
            product: self.product,
            batch: self.batch,
            inspector: self.inspector,
            check_time: clock::truncate_to_minute(check_time),
            result: self.result,
            defects: self.defects,
        }
    }
}
