//! Module for the storage layer and its common types.
//!
//! Handlers and services only see the `Repository` trait; the process-wide
//! store is created once at startup (`init_store`) and shared behind an `Arc`.
//! The bundled implementation keeps everything in memory, so all data is lost
//! when the process exits.

pub mod memory;
pub mod models;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub use memory::InMemoryStore;
pub use models::{Class, PointTransaction, Student, Teacher, TeacherProfile};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: Uuid },

    #[error("Referenced {entity} does not exist: {id}")]
    MissingParent { entity: &'static str, id: Uuid },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Access to the four entity tables.
///
/// Implementations must keep ids unique per table, keep teacher emails unique
/// (exact, case-sensitive match), refuse rows whose parent is missing, and
/// return multi-row results in insertion order. Each call reads one consistent
/// snapshot; two separate calls may observe writes made in between.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn insert_teacher(&self, teacher: Teacher) -> StoreResult<()>;
    async fn teacher_by_id(&self, id: Uuid) -> StoreResult<Option<Teacher>>;
    async fn teacher_by_email(&self, email: &str) -> StoreResult<Option<Teacher>>;

    async fn insert_class(&self, class: Class) -> StoreResult<()>;
    async fn class_by_id(&self, id: Uuid) -> StoreResult<Option<Class>>;
    /// A teacher's classes, each with its current head count.
    async fn classes_with_counts(&self, teacher_id: Uuid) -> StoreResult<Vec<(Class, usize)>>;

    async fn insert_student(&self, student: Student) -> StoreResult<()>;
    async fn student_by_id(&self, id: Uuid) -> StoreResult<Option<Student>>;
    /// Every student of a class with that student's transactions.
    async fn student_ledgers(
        &self,
        class_id: Uuid,
    ) -> StoreResult<Vec<(Student, Vec<PointTransaction>)>>;

    async fn insert_transaction(&self, transaction: PointTransaction) -> StoreResult<()>;
    async fn transactions_by_student(&self, student_id: Uuid)
        -> StoreResult<Vec<PointTransaction>>;
}

pub type Database = Arc<dyn Repository>;

/// Creates the process-wide store. Nothing needs tearing down.
pub fn init_store() -> Database {
    Arc::new(InMemoryStore::new())
}
