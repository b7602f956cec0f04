//! Training catalogue and enrollment use-case service.

use crate::model::record::{now_rfc3339, RecordId};
use crate::model::training::{EmployeeTraining, TrainingCourse, TrainingStatus};
use crate::store::backend::StorageBackend;
use crate::store::query::TextFilter;
use crate::store::{RecordStore, StoreResult};

/// Request model for publishing one course.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration_hours: u32,
    pub instructor: String,
}

/// Partial course update; `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub duration_hours: Option<u32>,
    pub instructor: Option<String>,
}

impl CourseUpdate {
    fn apply(self, course: &mut TrainingCourse) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(category) = self.category {
            course.category = category;
        }
        if let Some(duration_hours) = self.duration_hours {
            course.duration_hours = duration_hours;
        }
        if let Some(instructor) = self.instructor {
            course.instructor = instructor;
        }
    }
}

/// Catalogue listing filter; set fields AND together.
#[derive(Debug, Clone, Default)]
pub struct CourseQuery {
    pub category: Option<TextFilter>,
    pub title: Option<TextFilter>,
}

impl CourseQuery {
    pub fn matches(&self, course: &TrainingCourse) -> bool {
        self.category
            .as_ref()
            .map_or(true, |filter| filter.matches(&course.category))
            && self
                .title
                .as_ref()
                .map_or(true, |filter| filter.matches(&course.title))
    }
}

/// Partial enrollment update; `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentUpdate {
    pub status: Option<TrainingStatus>,
    pub progress_pct: Option<u8>,
}

impl EnrollmentUpdate {
    fn apply(self, enrollment: &mut EmployeeTraining) {
        if let Some(status) = self.status {
            enrollment.status = status;
        }
        if let Some(progress_pct) = self.progress_pct {
            enrollment.progress_pct = progress_pct;
        }
    }
}

/// Enrollment listing filter; set fields AND together.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentQuery {
    pub employee_id: Option<RecordId>,
    pub course_id: Option<RecordId>,
    pub status: Option<TrainingStatus>,
}

impl EnrollmentQuery {
    pub fn matches(&self, enrollment: &EmployeeTraining) -> bool {
        self.employee_id
            .map_or(true, |id| enrollment.employee_id == id)
            && self.course_id.map_or(true, |id| enrollment.course_id == id)
            && self
                .status
                .map_or(true, |status| enrollment.status == status)
    }
}

/// Training facade over the record store.
pub struct TrainingService<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> TrainingService<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    pub fn create_course(&mut self, input: NewCourse) -> StoreResult<TrainingCourse> {
        self.store.create(TrainingCourse {
            id: 0,
            title: input.title,
            description: input.description,
            category: input.category,
            duration_hours: input.duration_hours,
            instructor: input.instructor,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_course(&self, id: RecordId) -> Option<TrainingCourse> {
        self.store.get::<TrainingCourse>(id).cloned()
    }

    pub fn get_all_courses(&self, query: &CourseQuery) -> Vec<TrainingCourse> {
        self.store.select(|course| query.matches(course))
    }

    pub fn update_course(
        &mut self,
        id: RecordId,
        patch: CourseUpdate,
    ) -> StoreResult<Option<TrainingCourse>> {
        self.store.update_with(id, |course| patch.apply(course))
    }

    pub fn delete_course(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<TrainingCourse>(id)
    }

    /// Enrolls one employee in one course at zero progress.
    ///
    /// Neither side of the reference is checked to exist.
    pub fn enroll(
        &mut self,
        employee_id: RecordId,
        course_id: RecordId,
    ) -> StoreResult<EmployeeTraining> {
        self.store.create(EmployeeTraining {
            id: 0,
            employee_id,
            course_id,
            status: TrainingStatus::Enrolled,
            progress_pct: 0,
            completed_at: None,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_enrollment(&self, id: RecordId) -> Option<EmployeeTraining> {
        self.store.get::<EmployeeTraining>(id).cloned()
    }

    pub fn get_all_enrollments(&self, query: &EnrollmentQuery) -> Vec<EmployeeTraining> {
        self.store.select(|enrollment| query.matches(enrollment))
    }

    pub fn update_enrollment(
        &mut self,
        id: RecordId,
        patch: EnrollmentUpdate,
    ) -> StoreResult<Option<EmployeeTraining>> {
        self.store
            .update_with(id, |enrollment| patch.apply(enrollment))
    }

    pub fn delete_enrollment(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<EmployeeTraining>(id)
    }

    /// Marks one enrollment completed: full progress plus completion stamp.
    pub fn complete(&mut self, id: RecordId) -> StoreResult<Option<EmployeeTraining>> {
        let now = now_rfc3339();
        self.store
            .update_with(id, |enrollment: &mut EmployeeTraining| {
                enrollment.status = TrainingStatus::Completed;
                enrollment.progress_pct = 100;
                enrollment.completed_at = Some(now);
            })
    }
}
