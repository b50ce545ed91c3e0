//! Point totals and leaderboard ranking.
//!
//! Pure functions over rows already fetched from the store. Totals are plain
//! sums of signed amounts, so they can go negative and do not depend on the
//! order transactions were recorded in. The sum is exact in `i128` and only
//! the final value is clamped to the `i64` range.

use crate::database::{PointTransaction, Student};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentTotal {
    pub student: Student,
    pub total_points: i64,
}

pub fn total_points(transactions: &[PointTransaction]) -> i64 {
    let exact: i128 = transactions.iter().map(|p| i128::from(p.amount)).sum();
    exact.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Highest total first. Equal totals keep their incoming order.
pub fn rank(mut totals: Vec<StudentTotal>) -> Vec<StudentTotal> {
    // sort_by is stable
    totals.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn tx(amount: i64) -> PointTransaction {
        PointTransaction {
            id: Uuid::new_v4(),
            student_id: Uuid::nil(),
            amount,
            reason: String::new(),
            created_by: Uuid::nil(),
            created_at: Utc::now(),
        }
    }

    fn entry(name: &str, total_points: i64) -> StudentTotal {
        StudentTotal {
            student: Student {
                id: Uuid::new_v4(),
                class_id: Uuid::nil(),
                name: name.to_string(),
                student_number: 0,
                created_at: Utc::now(),
            },
            total_points,
        }
    }

    fn names(ranked: &[StudentTotal]) -> Vec<&str> {
        ranked.iter().map(|e| e.student.name.as_str()).collect()
    }

    #[test]
    fn test_total_is_signed_sum() {
        assert_eq!(total_points(&[]), 0);
        assert_eq!(total_points(&[tx(10), tx(-3)]), 7);
        assert_eq!(total_points(&[tx(-5), tx(-1)]), -6);
    }

    #[test]
    fn test_total_ignores_order() {
        let forward = [tx(4), tx(-9), tx(12), tx(1)];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(total_points(&forward), total_points(&backward));
    }

    #[test]
    fn test_total_ignores_order_at_extremes() {
        let forward = [tx(i64::MAX), tx(1), tx(-1)];
        let shuffled = [tx(-1), tx(i64::MAX), tx(1)];

        assert_eq!(total_points(&forward), i64::MAX);
        assert_eq!(total_points(&shuffled), i64::MAX);
    }

    #[test]
    fn test_total_clamped_only_at_the_end() {
        assert_eq!(total_points(&[tx(i64::MAX), tx(1)]), i64::MAX);
        assert_eq!(total_points(&[tx(i64::MIN), tx(-1)]), i64::MIN);
        // Intermediate overflow does not leak into the result.
        assert_eq!(
            total_points(&[tx(i64::MAX), tx(i64::MAX), tx(i64::MIN)]),
            i64::MAX - 1
        );
        assert_eq!(
            total_points(&[tx(i64::MIN), tx(i64::MAX), tx(i64::MIN), tx(5)]),
            i64::MIN + 4
        );
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![entry("a", 7), entry("b", 15), entry("c", -2)]);
        assert_eq!(names(&ranked), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_ties_keep_enumeration_order() {
        let ranked = rank(vec![
            entry("first", 5),
            entry("top", 9),
            entry("second", 5),
            entry("third", 5),
        ]);
        assert_eq!(names(&ranked), vec!["top", "first", "second", "third"]);
    }
}
