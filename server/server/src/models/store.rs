use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::RwLock;

use crate::models::{
    equipment::{Equipment, EquipmentAction, EquipmentStatus},
    production::{ProductionTask, TaskAction},
    quality::{InspectionResult, NewQualityRecord, QualityRecord},
    stats::{
        DashboardStats, EquipmentDetail, EquipmentStats, ProductionDetail, ProductionStats,
        QualityStats,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Task,
    Equipment,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Task => write!(f, "task"),
            Entity::Equipment => write!(f, "equipment"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NotFound(Entity),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(entity) => write!(f, "{} not found", entity),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
struct Collections {
    tasks: Vec<ProductionTask>,
    quality: Vec<QualityRecord>,
    equipment: Vec<Equipment>,
    next_quality_id: u32,
}

impl Collections {
    fn task_mut(&mut self, id: u32) -> Result<&mut ProductionTask> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound(Entity::Task))
    }

    fn equipment_mut(&mut self, id: u32) -> Result<&mut Equipment> {
        self.equipment
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::NotFound(Entity::Equipment))
    }
}

/// Owns every record. All mutation goes through `update_*`/`append_*`
/// under one write guard, so find-mutate-respond is atomic per request.
#[derive(Debug)]
pub struct RecordStore {
    inner: RwLock<Collections>,
}

impl RecordStore {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn seeded() -> Self {
        let tasks = vec![
            ProductionTask::new(1, "Product A assembly", "assembly"),
            ProductionTask::new(2, "Product B testing", "testing"),
        ];
        let quality = vec![QualityRecord {
            id: 1,
            product: "Product A".to_string(),
            batch: "Batch 001".to_string(),
            inspector: "Zhang San".to_string(),
            check_time: seed_time(2024, 1, 15, 10, 30),
            result: InspectionResult::Qualified,
            defects: Vec::new(),
        }];
        let equipment = vec![
            Equipment {
                id: 1,
                name: "Production line A".to_string(),
                kind: "assembly line".to_string(),
                status: EquipmentStatus::Running,
                last_maintenance: seed_date(2024, 1, 10),
                next_maintenance: seed_date(2024, 2, 10),
                maintenance_records: Vec::new(),
            },
            Equipment {
                id: 2,
                name: "Test rig B".to_string(),
                kind: "test instrument".to_string(),
                status: EquipmentStatus::Standby,
                last_maintenance: seed_date(2024, 1, 12),
                next_maintenance: seed_date(2024, 2, 12),
                maintenance_records: Vec::new(),
            },
        ];
        Self::from_parts(tasks, quality, equipment)
    }

    pub fn from_parts(
        tasks: Vec<ProductionTask>,
        quality: Vec<QualityRecord>,
        equipment: Vec<Equipment>,
    ) -> Self {
        let next_quality_id = quality.len() as u32 + 1;
        Self {
            inner: RwLock::new(Collections {
                tasks,
                quality,
                equipment,
                next_quality_id,
            }),
        }
    }

    #[cfg(test)]
    pub async fn find_task(&self, id: u32) -> Option<ProductionTask> {
        let inner = self.inner.read().await;
        inner.tasks.iter().find(|t| t.id == id).cloned()
    }

    #[cfg(test)]
    pub async fn find_equipment(&self, id: u32) -> Option<Equipment> {
        let inner = self.inner.read().await;
        inner.equipment.iter().find(|e| e.id == id).cloned()
    }

    pub async fn all_tasks(&self) -> Vec<ProductionTask> {
        self.inner.read().await.tasks.clone()
    }

    #[cfg(test)]
    pub async fn all_quality(&self) -> Vec<QualityRecord> {
        self.inner.read().await.quality.clone()
    }

    pub async fn all_equipment(&self) -> Vec<Equipment> {
        self.inner.read().await.equipment.clone()
    }

    /// Listing and stats taken from the same snapshot.
    pub async fn quality_overview(&self) -> (Vec<QualityRecord>, QualityStats) {
        let inner = self.inner.read().await;
        (inner.quality.clone(), QualityStats::compute(&inner.quality))
    }

    pub async fn append_quality(
        &self,
        record: NewQualityRecord,
        check_time: NaiveDateTime,
    ) -> QualityRecord {
        let mut inner = self.inner.write().await;
        let id = inner.next_quality_id;
        inner.next_quality_id += 1;
        let record = record.into_record(id, check_time);
        inner.quality.push(record.clone());
        record
    }

    /// `None` leaves a matched task untouched.
    pub async fn update_task(
        &self,
        id: u32,
        action: Option<TaskAction>,
        now: NaiveDateTime,
    ) -> Result<ProductionTask> {
        let mut inner = self.inner.write().await;
        let task = inner.task_mut(id)?;
        if let Some(action) = action {
            task.apply(action, now);
        }
        Ok(task.clone())
    }

    /// `None` leaves matched equipment untouched.
    pub async fn update_equipment(
        &self,
        id: u32,
        action: Option<EquipmentAction>,
        today: NaiveDate,
        technician: &str,
    ) -> Result<Equipment> {
        let mut inner = self.inner.write().await;
        let equipment = inner.equipment_mut(id)?;
        if let Some(action) = action {
            equipment.apply(action, today, technician);
        }
        Ok(equipment.clone())
    }

    pub async fn dashboard_stats(&self) -> DashboardStats {
        let inner = self.inner.read().await;
        DashboardStats {
            production: ProductionStats::compute(&inner.tasks),
            quality: QualityStats::compute(&inner.quality),
            equipment: EquipmentStats::compute(&inner.equipment),
        }
    }

    pub async fn production_detail(&self) -> ProductionDetail {
        ProductionDetail::compute(&self.inner.read().await.tasks)
    }

    pub async fn quality_stats(&self) -> QualityStats {
        QualityStats::compute(&self.inner.read().await.quality)
    }

    pub async fn equipment_detail(&self) -> EquipmentDetail {
        EquipmentDetail::compute(&self.inner.read().await.equipment)
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn seed_time(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    seed_date(year, month, day)
        .and_hms_opt(hour, min, 0)
        .unwrap_or_default()
}
