use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{UnknownAction, clock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Start,
    Pause,
    Resume,
    Complete,
    Reset,
}

impl FromStr for TaskAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "complete" => Ok(Self::Complete),
            "reset" => Ok(Self::Reset),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionTask {
    pub id: u32,
    pub name: String,
    pub stage: String,
    pub status: TaskStatus,
    #[serde(with = "clock::optional_seconds")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(with = "clock::optional_seconds")]
    pub end_time: Option<NaiveDateTime>,
    pub progress: u8,
}

impl ProductionTask {
    pub fn new(id: u32, name: &str, stage: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            stage: stage.to_string(),
            status: TaskStatus::NotStarted,
            start_time: None,
            end_time: None,
            progress: 0,
        }
    }

    pub fn apply(&mut self, action: TaskAction, now: NaiveDateTime) {
        match action {
            TaskAction::Start => {
                self.status = TaskStatus::InProgress;
                self.start_time = Some(now);
                self.progress = 10;
            }
            TaskAction::Pause => self.status = TaskStatus::Paused,
            TaskAction::Resume => self.status = TaskStatus::InProgress,
            TaskAction::Complete => {
                self.status = TaskStatus::Completed;
                self.end_time = Some(now);
                self.progress = 100;
            }
            TaskAction::Reset => {
                self.status = TaskStatus::NotStarted;
                self.start_time = None;
                self.end_time = None;
                self.progress = 0;
            }
        }
    }
}
