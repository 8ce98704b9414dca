//! Storage collaborator contracts.
//!
//! The engine reads and writes records only through these traits, so it can
//! run against any backing store. [`InMemoryStore`] is the bundled
//! implementation.
//!
//! # Overlap exclusion
//!
//! Validation reads the same-day entries and then writes, which on its own is
//! a check-then-act race between concurrent submissions. Implementations of
//! [`WorkloadStore`] close it by enforcing the overlap rule atomically on
//! [`WorkloadStore::insert`] and [`WorkloadStore::replace`], returning
//! [`StoreError::Conflict`] when a second overlapping write arrives.

mod memory;

pub use memory::InMemoryStore;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{
    BillingMonth, EntryId, Faculty, FacultyId, NewFaculty, NewSubject, PricedEntry, Subject,
    SubjectId, WorkloadEntry,
};

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would overlap an entry already stored for the same faculty and day.
    #[error("Write conflicts with stored entry {conflicting_id}")]
    Conflict {
        /// The stored entry that blocked the write.
        conflicting_id: EntryId,
    },

    /// A referential or uniqueness constraint rejected the write.
    #[error("Constraint violation: {message}")]
    Constraint {
        /// A description of the violated constraint.
        message: String,
    },

    /// The store could not be reached or is in an unusable state.
    #[error("Store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },
}

/// Durable workload entry records, keyed by faculty.
pub trait WorkloadStore {
    /// Returns every entry of a faculty member on one date, in insertion order.
    fn entries_for_faculty_on_date(
        &self,
        faculty_id: FacultyId,
        date: NaiveDate,
    ) -> Result<Vec<WorkloadEntry>, StoreError>;

    /// Returns every entry of a faculty member in one month, in insertion order.
    fn entries_for_faculty_in_month(
        &self,
        faculty_id: FacultyId,
        month: BillingMonth,
    ) -> Result<Vec<WorkloadEntry>, StoreError>;

    /// Persists a priced entry and returns its new id.
    ///
    /// Fails with `Constraint` if the faculty member or subject is not on
    /// record, and with `Conflict` if a same-day entry overlaps.
    fn insert(&self, entry: &PricedEntry) -> Result<EntryId, StoreError>;

    /// Replaces every field of an entry. Returns false if the id is absent.
    ///
    /// Applies the same reference and overlap checks as `insert`, ignoring
    /// the entry being replaced.
    fn replace(&self, id: EntryId, entry: &PricedEntry) -> Result<bool, StoreError>;

    /// Deletes an entry. Returns false if the id is absent.
    fn delete(&self, id: EntryId) -> Result<bool, StoreError>;

    /// Looks up a single entry.
    fn entry(&self, id: EntryId) -> Result<Option<WorkloadEntry>, StoreError>;

    /// Returns every stored entry, in insertion order.
    fn all_entries(&self) -> Result<Vec<WorkloadEntry>, StoreError>;
}

/// Faculty and subject records.
///
/// Deleting a faculty member removes their subjects and entries; deleting a
/// subject removes its entries.
pub trait FacultyDirectory {
    /// Registers a faculty member.
    fn add_faculty(&self, faculty: NewFaculty) -> Result<Faculty, StoreError>;

    /// Looks up a faculty member.
    fn faculty(&self, id: FacultyId) -> Result<Option<Faculty>, StoreError>;

    /// Returns every faculty member, ordered by id.
    fn all_faculty(&self) -> Result<Vec<Faculty>, StoreError>;

    /// Deletes a faculty member. Returns false if the id is absent.
    fn delete_faculty(&self, id: FacultyId) -> Result<bool, StoreError>;

    /// Registers a subject for an existing faculty member.
    fn add_subject(&self, subject: NewSubject) -> Result<Subject, StoreError>;

    /// Looks up a subject.
    fn subject(&self, id: SubjectId) -> Result<Option<Subject>, StoreError>;

    /// Returns every subject, ordered by id.
    fn all_subjects(&self) -> Result<Vec<Subject>, StoreError>;

    /// Deletes a subject. Returns false if the id is absent.
    fn delete_subject(&self, id: SubjectId) -> Result<bool, StoreError>;
}
