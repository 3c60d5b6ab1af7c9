use serde::Serialize;

use crate::models::{
    equipment::{Equipment, EquipmentStatus},
    production::{ProductionTask, TaskStatus},
    quality::{InspectionResult, QualityRecord},
};

fn rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub completion_rate: f64,
}

impl ProductionStats {
    pub fn compute(tasks: &[ProductionTask]) -> Self {
        let total = tasks.len();
        let completed = count_tasks(tasks, TaskStatus::Completed);
        Self {
            total,
            completed,
            in_progress: count_tasks(tasks, TaskStatus::InProgress),
            completion_rate: rate(completed, total),
        }
    }
}

/// Production stats with the per-status breakdown the refresh client reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionDetail {
    #[serde(flatten)]
    pub summary: ProductionStats,
    pub running: usize,
    pub paused: usize,
    pub pending: usize,
}

impl ProductionDetail {
    pub fn compute(tasks: &[ProductionTask]) -> Self {
        let summary = ProductionStats::compute(tasks);
        Self {
            running: summary.in_progress,
            paused: count_tasks(tasks, TaskStatus::Paused),
            pending: count_tasks(tasks, TaskStatus::NotStarted),
            summary,
        }
    }
}

fn count_tasks(tasks: &[ProductionTask], status: TaskStatus) -> usize {
    tasks.iter().filter(|task| task.status == status).count()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityStats {
    pub total: usize,
    pub qualified: usize,
    pub unqualified: usize,
    pub qualification_rate: f64,
}

impl QualityStats {
    pub fn compute(records: &[QualityRecord]) -> Self {
        let total = records.len();
        let qualified = records
            .iter()
            .filter(|record| record.result == InspectionResult::Qualified)
            .count();
        Self {
            total,
            qualified,
            unqualified: total - qualified,
            qualification_rate: rate(qualified, total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentStats {
    pub total: usize,
    pub running: usize,
    pub maintenance: usize,
}

impl EquipmentStats {
    pub fn compute(equipment: &[Equipment]) -> Self {
        Self {
            total: equipment.len(),
            running: count_equipment(equipment, EquipmentStatus::Running),
            maintenance: count_equipment(equipment, EquipmentStatus::UnderMaintenance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentDetail {
    #[serde(flatten)]
    pub summary: EquipmentStats,
    pub standby: usize,
}

impl EquipmentDetail {
    pub fn compute(equipment: &[Equipment]) -> Self {
        Self {
            summary: EquipmentStats::compute(equipment),
            standby: count_equipment(equipment, EquipmentStatus::Standby),
        }
    }
}

fn count_equipment(equipment: &[Equipment], status: EquipmentStatus) -> usize {
    equipment.iter().filter(|e| e.status == status).count()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub production: ProductionStats,
    pub quality: QualityStats,
    pub equipment: EquipmentStats,
}
