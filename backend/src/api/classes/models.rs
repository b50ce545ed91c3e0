//! Request and response bodies for the class endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::{Class, Student};
use crate::services::classroom::{ClassDetail, ClassSummary};
use crate::services::data_aggregator::StudentTotal;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub grade: i32,
    pub class_number: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddStudentRequest {
    pub name: String,
    pub student_number: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassResponse {
    pub id: Uuid,
    pub name: String,
    pub grade: i32,
    pub class_number: i32,
    pub access_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Class> for ClassResponse {
    fn from(class: Class) -> Self {
        Self {
            id: class.id,
            name: class.name,
            grade: class.grade,
            class_number: class.class_number,
            access_code: class.access_code,
            created_at: class.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassListItem {
    #[serde(flatten)]
    pub class: ClassResponse,
    pub student_count: usize,
}

impl From<ClassSummary> for ClassListItem {
    fn from(summary: ClassSummary) -> Self {
        Self {
            class: summary.class.into(),
            student_count: summary.student_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: Uuid,
    pub name: String,
    pub student_number: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            student_number: student.student_number,
            created_at: student.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentWithPoints {
    pub id: Uuid,
    pub name: String,
    pub student_number: i32,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
}

impl From<StudentTotal> for StudentWithPoints {
    fn from(entry: StudentTotal) -> Self {
        Self {
            id: entry.student.id,
            name: entry.student.name,
            student_number: entry.student.student_number,
            total_points: entry.total_points,
            created_at: entry.student.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassDetailResponse {
    #[serde(flatten)]
    pub class: ClassResponse,
    pub students: Vec<StudentWithPoints>,
}

impl From<ClassDetail> for ClassDetailResponse {
    fn from(detail: ClassDetail) -> Self {
        Self {
            class: detail.class.into(),
            students: detail.students.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub student_id: Uuid,
    pub name: String,
    pub student_number: i32,
    pub total_points: i64,
}

impl From<StudentTotal> for LeaderboardEntry {
    fn from(entry: StudentTotal) -> Self {
        Self {
            student_id: entry.student.id,
            name: entry.student.name,
            student_number: entry.student.student_number,
            total_points: entry.total_points,
        }
    }
}
