//! Training catalogue and enrollment models.

use crate::model::record::record_impl;
use crate::model::record::RecordId;
use serde::{Deserialize, Serialize};

/// Catalogue entry for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCourse {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration_hours: u32,
    pub instructor: String,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(TrainingCourse, "training_courses");

/// Progress state of one enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    Enrolled,
    InProgress,
    Completed,
    Dropped,
}

/// One employee's enrollment in one course.
///
/// `employee_id` and `course_id` are loose references; neither side is
/// checked to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTraining {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub course_id: RecordId,
    pub status: TrainingStatus,
    /// 0..=100.
    pub progress_pct: u8,
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(EmployeeTraining, "employee_trainings");
