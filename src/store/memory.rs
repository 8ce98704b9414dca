//! In-memory implementation of the storage traits.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::models::{
    BillingMonth, DATE_FORMAT, EntryId, Faculty, FacultyId, NewFaculty, NewSubject, PricedEntry,
    Subject, SubjectId, WorkloadEntry,
};

use super::{FacultyDirectory, StoreError, WorkloadStore};

#[derive(Debug, Default)]
struct State {
    last_entry_id: u64,
    last_faculty_id: u64,
    last_subject_id: u64,
    entries: BTreeMap<EntryId, WorkloadEntry>,
    faculty: BTreeMap<FacultyId, Faculty>,
    subjects: BTreeMap<SubjectId, Subject>,
}

impl State {
    /// Rejects an entry whose faculty member or subject is not on record.
    fn check_references(&self, entry: &PricedEntry) -> Result<(), StoreError> {
        if !self.faculty.contains_key(&entry.faculty_id) {
            return Err(StoreError::Constraint {
                message: format!("faculty {} does not exist", entry.faculty_id),
            });
        }
        if !self.subjects.contains_key(&entry.subject_id) {
            return Err(StoreError::Constraint {
                message: format!("subject {} does not exist", entry.subject_id),
            });
        }
        Ok(())
    }

    /// Finds a stored entry blocking `entry`, ignoring `exclude`.
    fn conflicting_entry(&self, entry: &PricedEntry, exclude: Option<EntryId>) -> Option<EntryId> {
        let work_date = entry.work_date.format(DATE_FORMAT).to_string();
        self.entries
            .values()
            .filter(|stored| Some(stored.id) != exclude)
            .filter(|stored| stored.faculty_id == entry.faculty_id && stored.work_date == work_date)
            .find(|stored| stored.conflicts_with(&entry.time_range))
            .map(|stored| stored.id)
    }
}

/// A thread-safe store held entirely in memory.
///
/// All state sits behind one mutex, so the overlap check inside
/// [`WorkloadStore::insert`] and [`WorkloadStore::replace`] and the write that
/// follows it happen atomically. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a record exactly as given, keeping its id and bypassing the
    /// overlap constraint.
    ///
    /// Used to restore previously persisted records, which may predate the
    /// constraint or carry malformed dates and times.
    pub fn import_entry(&self, entry: WorkloadEntry) -> Result<(), StoreError> {
        let mut state = self.lock()?;
        state.last_entry_id = state.last_entry_id.max(entry.id.0);
        state.entries.insert(entry.id, entry);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Unavailable {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl WorkloadStore for InMemoryStore {
    fn entries_for_faculty_on_date(
        &self,
        faculty_id: FacultyId,
        date: NaiveDate,
    ) -> Result<Vec<WorkloadEntry>, StoreError> {
        let work_date = date.format(DATE_FORMAT).to_string();
        let state = self.lock()?;
        Ok(state
            .entries
            .values()
            .filter(|entry| entry.faculty_id == faculty_id && entry.work_date == work_date)
            .cloned()
            .collect())
    }

    fn entries_for_faculty_in_month(
        &self,
        faculty_id: FacultyId,
        month: BillingMonth,
    ) -> Result<Vec<WorkloadEntry>, StoreError> {
        let state = self.lock()?;
        Ok(state
            .entries
            .values()
            .filter(|entry| entry.faculty_id == faculty_id)
            .filter(|entry| entry.date().is_some_and(|date| month.contains(date)))
            .cloned()
            .collect())
    }

    fn insert(&self, entry: &PricedEntry) -> Result<EntryId, StoreError> {
        let mut state = self.lock()?;

        state.check_references(entry)?;
        if let Some(conflicting_id) = state.conflicting_entry(entry, None) {
            return Err(StoreError::Conflict { conflicting_id });
        }

        state.last_entry_id += 1;
        let id = EntryId(state.last_entry_id);
        state.entries.insert(id, WorkloadEntry::from_priced(id, entry));
        Ok(id)
    }

    fn replace(&self, id: EntryId, entry: &PricedEntry) -> Result<bool, StoreError> {
        let mut state = self.lock()?;

        if !state.entries.contains_key(&id) {
            return Ok(false);
        }
        state.check_references(entry)?;
        if let Some(conflicting_id) = state.conflicting_entry(entry, Some(id)) {
            return Err(StoreError::Conflict { conflicting_id });
        }

        state.entries.insert(id, WorkloadEntry::from_priced(id, entry));
        Ok(true)
    }

    fn delete(&self, id: EntryId) -> Result<bool, StoreError> {
        Ok(self.lock()?.entries.remove(&id).is_some())
    }

    fn entry(&self, id: EntryId) -> Result<Option<WorkloadEntry>, StoreError> {
        Ok(self.lock()?.entries.get(&id).cloned())
    }

    fn all_entries(&self) -> Result<Vec<WorkloadEntry>, StoreError> {
        Ok(self.lock()?.entries.values().cloned().collect())
    }
}

impl FacultyDirectory for InMemoryStore {
    fn add_faculty(&self, faculty: NewFaculty) -> Result<Faculty, StoreError> {
        let mut state = self.lock()?;

        let duplicate = state
            .faculty
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&faculty.email));
        if duplicate {
            return Err(StoreError::Constraint {
                message: format!("email {} already exists", faculty.email),
            });
        }

        state.last_faculty_id += 1;
        let record = Faculty {
            id: FacultyId(state.last_faculty_id),
            name: faculty.name,
            email: faculty.email,
            department: faculty.department,
        };
        state.faculty.insert(record.id, record.clone());
        Ok(record)
    }

    fn faculty(&self, id: FacultyId) -> Result<Option<Faculty>, StoreError> {
        Ok(self.lock()?.faculty.get(&id).cloned())
    }

    fn all_faculty(&self) -> Result<Vec<Faculty>, StoreError> {
        Ok(self.lock()?.faculty.values().cloned().collect())
    }

    fn delete_faculty(&self, id: FacultyId) -> Result<bool, StoreError> {
        let mut state = self.lock()?;

        if state.faculty.remove(&id).is_none() {
            return Ok(false);
        }
        state.subjects.retain(|_, subject| subject.faculty_id != id);
        state.entries.retain(|_, entry| entry.faculty_id != id);
        Ok(true)
    }

    fn add_subject(&self, subject: NewSubject) -> Result<Subject, StoreError> {
        let mut state = self.lock()?;

        if !state.faculty.contains_key(&subject.faculty_id) {
            return Err(StoreError::Constraint {
                message: format!("faculty {} does not exist", subject.faculty_id),
            });
        }

        state.last_subject_id += 1;
        let record = Subject {
            id: SubjectId(state.last_subject_id),
            name: subject.name,
            faculty_id: subject.faculty_id,
        };
        state.subjects.insert(record.id, record.clone());
        Ok(record)
    }

    fn subject(&self, id: SubjectId) -> Result<Option<Subject>, StoreError> {
        Ok(self.lock()?.subjects.get(&id).cloned())
    }

    fn all_subjects(&self) -> Result<Vec<Subject>, StoreError> {
        Ok(self.lock()?.subjects.values().cloned().collect())
    }

    fn delete_subject(&self, id: SubjectId) -> Result<bool, StoreError> {
        let mut state = self.lock()?;

        if state.subjects.remove(&id).is_none() {
            return Ok(false);
        }
        state.entries.retain(|_, entry| entry.subject_id != id);
        Ok(true)
    }
}
