//! The point ledger: awarding/deducting points, per-student history and the
//! class leaderboard.
//!
//! Transactions are append-only. Nothing here updates or removes one.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::classroom::student_totals;
use super::data_aggregator::{rank, total_points, StudentTotal};
use super::ownership::{owned_class, owned_student};
use crate::database::{PointTransaction, Repository, Student, Teacher};
use crate::errors::AppResult;

pub struct NewTransaction {
    pub student_id: String,
    pub amount: i64,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct StudentPoints {
    pub student: Student,
    pub total_points: i64,
    /// In the order they were recorded.
    pub transactions: Vec<PointTransaction>,
}

/// Appends a signed entry to a student's ledger. No bound on the resulting total.
pub async fn record_transaction(
    db: &dyn Repository,
    teacher: &Teacher,
    new: NewTransaction,
) -> AppResult<PointTransaction> {
    let owned = owned_student(db, teacher, &new.student_id).await?;

    let transaction = PointTransaction {
        id: Uuid::new_v4(),
        student_id: owned.student.id,
        amount: new.amount,
        reason: new.reason,
        created_by: teacher.id,
        created_at: Utc::now(),
    };

    db.insert_transaction(transaction.clone()).await?;
    info!(
        student_id = %transaction.student_id,
        amount = transaction.amount,
        "Points recorded"
    );
    Ok(transaction)
}

pub async fn student_points(
    db: &dyn Repository,
    teacher: &Teacher,
    student_id: &str,
) -> AppResult<StudentPoints> {
    let owned = owned_student(db, teacher, student_id).await?;
    let transactions = db.transactions_by_student(owned.student.id).await?;

    Ok(StudentPoints {
        total_points: total_points(&transactions),
        student: owned.student,
        transactions,
    })
}

pub async fn leaderboard(
    db: &dyn Repository,
    teacher: &Teacher,
    class_id: &str,
) -> AppResult<Vec<StudentTotal>> {
    let class = owned_class(db, teacher, class_id).await?;
    Ok(rank(student_totals(db, class.id).await?))
}
