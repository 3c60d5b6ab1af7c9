use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::UnknownAction;

pub const ROUTINE_MAINTENANCE: &str = "routine";
pub const ROUTINE_DESCRIPTION: &str = "routine equipment maintenance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Running,
    Standby,
    UnderMaintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentAction {
    Maintenance,
    Repair,
    Standby,
}

impl FromStr for EquipmentAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintenance" => Ok(Self::Maintenance),
            "repair" => Ok(Self::Repair),
            "standby" => Ok(Self::Standby),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub technician: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: EquipmentStatus,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
    pub maintenance_records: Vec<MaintenanceRecord>,
}

impl Equipment {
    pub fn apply(&mut self, action: EquipmentAction, today: NaiveDate, technician: &str) {
        match action {
            EquipmentAction::Maintenance => {
                self.status = EquipmentStatus::UnderMaintenance;
                self.last_maintenance = today;
                self.maintenance_records.push(MaintenanceRecord {
                    date: today,
                    kind: ROUTINE_MAINTENANCE.to_string(),
                    description: ROUTINE_DESCRIPTION.to_string(),
                    technician: technician.to_string(),
                });
            }
            EquipmentAction::Repair => self.status = EquipmentStatus::Running,
            EquipmentAction::Standby => self.status = EquipmentStatus::Standby,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn line() -> Equipment {
        Equipment {
            id: 1,
            name: "Line A".to_string(),
            kind: "assembly line".to_string(),
            status: EquipmentStatus::Running,
            last_maintenance: day("2024-01-10"),
            next_maintenance: day("2024-02-10"),
            maintenance_records: Vec::new(),
        }
    }

    #[test]
    fn parse_action() {
        assert_eq!(
            "maintenance".parse::<EquipmentAction>().unwrap(),
            EquipmentAction::Maintenance
        );
        assert!("explode".parse::<EquipmentAction>().is_err());
    }

    #[test]
    fn maintenance_appends_one_record() {
        let mut equipment = line();
        equipment.apply(EquipmentAction::Maintenance, day("2024-01-20"), "Li Si");
        assert_eq!(equipment.status, EquipmentStatus::UnderMaintenance);
        assert_eq!(equipment.last_maintenance, day("2024-01-20"));
        assert_eq!(equipment.next_maintenance, day("2024-02-10"));
        assert_eq!(equipment.maintenance_records.len(), 1);

        let record = &equipment.maintenance_records[0];
        assert_eq!(record.date, day("2024-01-20"));
        assert_eq!(record.kind, ROUTINE_MAINTENANCE);
        assert_eq!(record.technician, "Li Si");

        equipment.apply(EquipmentAction::Maintenance, day("2024-01-21"), "Li Si");
        assert_eq!(equipment.maintenance_records.len(), 2);
    }

    #[test]
    fn repair_and_standby_only_touch_status() {
        let mut equipment = line();
        equipment.apply(EquipmentAction::Standby, day("2024-01-20"), "Li Si");
        assert_eq!(equipment.status, EquipmentStatus::Standby);
        assert_eq!(equipment.last_maintenance, day("2024-01-10"));

        equipment.apply(EquipmentAction::Repair, day("2024-01-20"), "Li Si");
        assert_eq!(equipment.status, EquipmentStatus::Running);
        assert!(equipment.maintenance_records.is_empty());
    }

    #[test]
    fn wire_shape() {
        let mut equipment = line();
        equipment.apply(EquipmentAction::Maintenance, day("2024-01-20"), "Li Si");
        let json = serde_json::to_value(&equipment).unwrap();
        assert_eq!(json["type"], "assembly line");
        assert_eq!(json["status"], "under_maintenance");
        assert_eq!(json["last_maintenance"], "2024-01-20");
        assert_eq!(json["maintenance_records"][0]["type"], "routine");
        assert_eq!(json["maintenance_records"][0]["date"], "2024-01-20");
    }
}
