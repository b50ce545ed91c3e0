//! Volatile, process-lifetime implementation of `Repository`.
//!
//! All four tables live behind one `RwLock`. Mutations are serialized, and each
//! read holds the lock for its whole duration, so a single call never mixes
//! rows from before and after a write. Reads that span tables, such as the
//! class head counts and per-class ledgers, are single calls for that reason.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Class, PointTransaction, Student, Teacher};
use super::{Repository, StoreError, StoreResult};

/// Insertion-ordered rows with an id index.
struct Table<T> {
    rows: Vec<T>,
    index: HashMap<Uuid, usize>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn contains(&self, id: &Uuid) -> bool {
        self.index.contains_key(id)
    }

    fn get(&self, id: &Uuid) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.rows[pos])
    }

    fn insert(&mut self, entity: &'static str, id: Uuid, row: T) -> StoreResult<()> {
        if self.contains(&id) {
            return Err(StoreError::DuplicateId { entity, id });
        }
        self.index.insert(id, self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.iter().filter(|row| pred(row)).cloned().collect()
    }
}

struct Tables {
    teachers: Table<Teacher>,
    emails: HashMap<String, Uuid>,
    classes: Table<Class>,
    students: Table<Student>,
    transactions: Table<PointTransaction>,
}

pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                teachers: Table::new(),
                emails: HashMap::new(),
                classes: Table::new(),
                students: Table::new(),
                transactions: Table::new(),
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryStore {
    async fn insert_teacher(&self, teacher: Teacher) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if tables.emails.contains_key(&teacher.email) {
            return Err(StoreError::DuplicateEmail(teacher.email));
        }
        let (id, email) = (teacher.id, teacher.email.clone());
        tables.teachers.insert("teacher", id, teacher)?;
        tables.emails.insert(email, id);
        Ok(())
    }

    async fn teacher_by_id(&self, id: Uuid) -> StoreResult<Option<Teacher>> {
        Ok(self.tables.read().await.teachers.get(&id).cloned())
    }

    async fn teacher_by_email(&self, email: &str) -> StoreResult<Option<Teacher>> {
        let tables = self.tables.read().await;
        Ok(tables
            .emails
            .get(email)
            .and_then(|id| tables.teachers.get(id))
            .cloned())
    }

    async fn insert_class(&self, class: Class) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.teachers.contains(&class.teacher_id) {
            return Err(StoreError::MissingParent {
                entity: "teacher",
                id: class.teacher_id,
            });
        }
        tables.classes.insert("class", class.id, class)
    }

    async fn class_by_id(&self, id: Uuid) -> StoreResult<Option<Class>> {
        Ok(self.tables.read().await.classes.get(&id).cloned())
    }

    async fn classes_with_counts(&self, teacher_id: Uuid) -> StoreResult<Vec<(Class, usize)>> {
        let tables = self.tables.read().await;
        let classes = tables.classes.filter(|c| c.teacher_id == teacher_id);

        let mut counts: HashMap<Uuid, usize> = classes.iter().map(|c| (c.id, 0)).collect();
        for student in &tables.students.rows {
            if let Some(count) = counts.get_mut(&student.class_id) {
                *count += 1;
            }
        }
        Ok(classes
            .into_iter()
            .map(|c| {
                let count = counts.get(&c.id).copied().unwrap_or(0);
                (c, count)
            })
            .collect())
    }

    async fn insert_student(&self, student: Student) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.classes.contains(&student.class_id) {
            return Err(StoreError::MissingParent {
                entity: "class",
                id: student.class_id,
            });
        }
        tables.students.insert("student", student.id, student)
    }

    async fn student_by_id(&self, id: Uuid) -> StoreResult<Option<Student>> {
        Ok(self.tables.read().await.students.get(&id).cloned())
    }

    async fn student_ledgers(
        &self,
        class_id: Uuid,
    ) -> StoreResult<Vec<(Student, Vec<PointTransaction>)>> {
        let tables = self.tables.read().await;
        let students = tables.students.filter(|s| s.class_id == class_id);

        let mut ledgers: HashMap<Uuid, Vec<PointTransaction>> =
            students.iter().map(|s| (s.id, Vec::new())).collect();
        for transaction in &tables.transactions.rows {
            if let Some(ledger) = ledgers.get_mut(&transaction.student_id) {
                ledger.push(transaction.clone());
            }
        }
        Ok(students
            .into_iter()
            .map(|s| {
                let ledger = ledgers.remove(&s.id).unwrap_or_default();
                (s, ledger)
            })
            .collect())
    }

    async fn insert_transaction(&self, transaction: PointTransaction) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.students.contains(&transaction.student_id) {
            return Err(StoreError::MissingParent {
                entity: "student",
                id: transaction.student_id,
            });
        }
        tables
            .transactions
            .insert("point transaction", transaction.id, transaction)
    }

    async fn transactions_by_student(
        &self,
        student_id: Uuid,
    ) -> StoreResult<Vec<PointTransaction>> {
        let tables = self.tables.read().await;
        Ok(tables.transactions.filter(|p| p.student_id == student_id))
    }
}
