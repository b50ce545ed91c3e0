//! Rust structs that represent the four in-memory tables.
//!
//! These records are what the store keeps; API responses are shaped separately
//! in each `api` module so that, for example, a teacher's password hash never
//! leaves this layer by accident.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub school: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Teacher fields safe to return to a client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeacherProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub school: String,
}

impl From<&Teacher> for TeacherProfile {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id,
            email: teacher.email.clone(),
            name: teacher.name.clone(),
            school: teacher.school.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub name: String,
    pub grade: i32,
    pub class_number: i32,
    pub access_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: Uuid,
    pub class_id: Uuid,
    pub name: String,
    pub student_number: i32,
    pub created_at: DateTime<Utc>,
}

/// Append-only ledger entry. `amount` may be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointTransaction {
    pub id: Uuid,
    pub student_id: Uuid,
    pub amount: i64,
    pub reason: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}
