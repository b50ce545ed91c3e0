//! Request and response bodies for the point endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::PointTransaction;
use crate::services::ledger::StudentPoints;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePointRequest {
    pub student_id: String,
    pub amount: i64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointTransactionResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub amount: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl From<PointTransaction> for PointTransactionResponse {
    fn from(p: PointTransaction) -> Self {
        Self {
            id: p.id,
            student_id: p.student_id,
            amount: p.amount,
            reason: p.reason,
            created_at: p.created_at,
        }
    }
}

/// History row; the student is implied by the enclosing response.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionEntry {
    pub id: Uuid,
    pub amount: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentPointsResponse {
    pub student_id: Uuid,
    pub student_name: String,
    pub total_points: i64,
    pub transactions: Vec<TransactionEntry>,
}

impl From<StudentPoints> for StudentPointsResponse {
    fn from(points: StudentPoints) -> Self {
        Self {
            student_id: points.student.id,
            student_name: points.student.name,
            total_points: points.total_points,
            transactions: points
                .transactions
                .into_iter()
                .map(|p| TransactionEntry {
                    id: p.id,
                    amount: p.amount,
                    reason: p.reason,
                    created_at: p.created_at,
                })
                .collect(),
        }
    }
}
