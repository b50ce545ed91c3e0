//! The ownership chain: Teacher → Class → Student → PointTransaction.
//!
//! Every class- or student-scoped operation resolves the entity, walks up to
//! the owning class and compares that class's teacher with the caller. The
//! comparison lives in `ensure_owner` and nowhere else.

use tracing::warn;
use uuid::Uuid;

use crate::database::{Class, Repository, Student, Teacher};
use crate::errors::{AppError, AppResult};

/// A student together with the class that owns it.
#[derive(Debug, Clone)]
pub struct OwnedStudent {
    pub student: Student,
    pub class: Class,
}

fn class_not_found() -> AppError {
    AppError::NotFound("Class not found".to_string())
}

fn student_not_found() -> AppError {
    AppError::NotFound("Student not found".to_string())
}

/// Ids arrive as strings in paths and bodies. Anything that is not a UUID
/// cannot name a stored row, so it is reported exactly like an unknown id.
fn parse_id(raw: &str, not_found: fn() -> AppError) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| not_found())
}

fn ensure_owner(class: &Class, teacher: &Teacher) -> AppResult<()> {
    if class.teacher_id != teacher.id {
        warn!(
            teacher_id = %teacher.id,
            class_id = %class.id,
            "Ownership check failed"
        );
        return Err(AppError::Forbidden("Not authorized".to_string()));
    }
    Ok(())
}

pub async fn owned_class(
    db: &dyn Repository,
    teacher: &Teacher,
    class_id: &str,
) -> AppResult<Class> {
    let id = parse_id(class_id, class_not_found)?;
    let class = db.class_by_id(id).await?.ok_or_else(class_not_found)?;
    ensure_owner(&class, teacher)?;
    Ok(class)
}

pub async fn owned_student(
    db: &dyn Repository,
    teacher: &Teacher,
    student_id: &str,
) -> AppResult<OwnedStudent> {
    let id = parse_id(student_id, student_not_found)?;
    let student = db.student_by_id(id).await?.ok_or_else(student_not_found)?;

    // The store refuses orphans, so a missing class here is a broken store.
    let class = db.class_by_id(student.class_id).await?.ok_or_else(|| {
        AppError::Internal(format!("student {} has no class", student.id))
    })?;
    ensure_owner(&class, teacher)?;

    Ok(OwnedStudent { student, class })
}
