//! Class and student management.
//!
//! Creates classes with a fresh access code, lists a teacher's classes with
//! their head counts, builds the class detail view and enrolls students.

use chrono::Utc;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use super::data_aggregator::{total_points, StudentTotal};
use super::ownership::owned_class;
use crate::database::{Class, Repository, Student, Teacher};
use crate::errors::AppResult;

const ACCESS_CODE_LEN: usize = 8;
const ACCESS_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub struct NewClass {
    pub name: String,
    pub grade: i32,
    pub class_number: i32,
}

pub struct NewStudent {
    pub name: String,
    pub student_number: i32,
}

#[derive(Debug, Clone)]
pub struct ClassSummary {
    pub class: Class,
    pub student_count: usize,
}

#[derive(Debug, Clone)]
pub struct ClassDetail {
    pub class: Class,
    pub students: Vec<StudentTotal>,
}

/// 8 random characters from A-Z and 0-9.
pub fn generate_access_code() -> String {
    let mut rng = rand::thread_rng();
    (0..ACCESS_CODE_LEN)
        .map(|_| ACCESS_CODE_CHARSET[rng.gen_range(0..ACCESS_CODE_CHARSET.len())] as char)
        .collect()
}

pub async fn create_class(
    db: &dyn Repository,
    teacher: &Teacher,
    new: NewClass,
) -> AppResult<Class> {
    let class = Class {
        id: Uuid::new_v4(),
        teacher_id: teacher.id,
        name: new.name,
        grade: new.grade,
        class_number: new.class_number,
        access_code: generate_access_code(),
        created_at: Utc::now(),
    };

    db.insert_class(class.clone()).await?;
    info!(teacher_id = %teacher.id, class_id = %class.id, "Class created");
    Ok(class)
}

pub async fn list_classes(db: &dyn Repository, teacher: &Teacher) -> AppResult<Vec<ClassSummary>> {
    let classes = db.classes_with_counts(teacher.id).await?;
    Ok(classes
        .into_iter()
        .map(|(class, student_count)| ClassSummary {
            class,
            student_count,
        })
        .collect())
}

/// Students with their totals, in enrollment order.
pub async fn student_totals(
    db: &dyn Repository,
    class_id: Uuid,
) -> AppResult<Vec<StudentTotal>> {
    let ledgers = db.student_ledgers(class_id).await?;
    Ok(ledgers
        .into_iter()
        .map(|(student, transactions)| StudentTotal {
            total_points: total_points(&transactions),
            student,
        })
        .collect())
}

pub async fn class_detail(
    db: &dyn Repository,
    teacher: &Teacher,
    class_id: &str,
) -> AppResult<ClassDetail> {
    let class = owned_class(db, teacher, class_id).await?;
    let students = student_totals(db, class.id).await?;
    Ok(ClassDetail { class, students })
}

/// Student numbers are taken as given; duplicates within a class are allowed.
pub async fn add_student(
    db: &dyn Repository,
    teacher: &Teacher,
    class_id: &str,
    new: NewStudent,
) -> AppResult<Student> {
    let class = owned_class(db, teacher, class_id).await?;
    let student = Student {
        id: Uuid::new_v4(),
        class_id: class.id,
        name: new.name,
        student_number: new.student_number,
        created_at: Utc::now(),
    };

    db.insert_student(student.clone()).await?;
    info!(class_id = %class.id, student_id = %student.id, "Student enrolled");
    Ok(student)
}
