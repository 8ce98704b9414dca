//! Workload service.
//!
//! Orchestrates the engine over a store: reads the same-day snapshot, runs
//! validation and pricing, persists accepted entries, and assembles monthly
//! summaries, receipts, listings, and analytics.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::calculation::{
    ReceiptDataBuilder, admin_listing, compute_analytics, summarize, validate_and_price,
};
use crate::config::{ConfigLoader, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AdminWorkloadRow, Analytics, BillingMonth, EntryId, Faculty, FacultyId, MonthlySummary,
    NewFaculty, NewSubject, ReceiptDocument, RecordedEntry, Subject, SubjectId, WorkloadCandidate,
    WorkloadEntry,
};
use crate::store::{FacultyDirectory, WorkloadStore};

/// Runs workload operations against a store.
///
/// The service holds no mutable state of its own. Overlaps between concurrent
/// submissions are caught by the store's exclusion constraint and reported as
/// `OverlappingSlot`, exactly like overlaps caught during validation.
///
/// # Example
///
/// ```
/// use faculty_payroll::calculation::ReceiptDataBuilder;
/// use faculty_payroll::config::RateTable;
/// use faculty_payroll::models::{ActivityKind, NewFaculty, NewSubject, WorkloadCandidate};
/// use faculty_payroll::service::WorkloadService;
/// use faculty_payroll::store::InMemoryStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let service = WorkloadService::new(
///     InMemoryStore::new(),
///     RateTable::new(Decimal::new(500, 0), HashMap::new()),
///     ReceiptDataBuilder::new("Example College", "₹", ""),
/// );
/// let faculty = service.add_faculty(NewFaculty {
///     name: "Asha Patil".to_string(),
///     email: "asha@example.edu".to_string(),
///     department: "Computer".to_string(),
/// })?;
/// let subject = service.add_subject(NewSubject {
///     name: "Compilers".to_string(),
///     faculty_id: faculty.id,
/// })?;
///
/// let recorded = service.submit_entry(&WorkloadCandidate {
///     faculty_id: faculty.id,
///     subject_id: subject.id,
///     work_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     activity_kind: ActivityKind::Lecture,
///     start_time: "09:00".to_string(),
///     end_time: "10:00".to_string(),
/// })?;
/// assert_eq!(recorded.entry.pay, Decimal::new(500, 0));
/// # Ok::<(), faculty_payroll::error::EngineError>(())
/// ```
pub struct WorkloadService<S> {
    store: S,
    rates: RateTable,
    receipts: ReceiptDataBuilder,
}

impl<S> WorkloadService<S>
where
    S: WorkloadStore + FacultyDirectory,
{
    /// Creates a service over a store.
    pub fn new(store: S, rates: RateTable, receipts: ReceiptDataBuilder) -> Self {
        Self {
            store,
            rates,
            receipts,
        }
    }

    /// Creates a service from loaded configuration.
    pub fn from_config(store: S, config: &ConfigLoader) -> Self {
        Self::new(
            store,
            config.rate_table().clone(),
            ReceiptDataBuilder::from_config(config.institution()),
        )
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates, prices, and stores a new entry.
    pub fn submit_entry(&self, candidate: &WorkloadCandidate) -> EngineResult<RecordedEntry> {
        self.require_faculty(candidate.faculty_id)?;
        self.require_subject(candidate.subject_id)?;

        let existing = self
            .store
            .entries_for_faculty_on_date(candidate.faculty_id, candidate.work_date)?;
        let priced = validate_and_price(candidate, &existing, None, &self.rates)?;

        let id = self.store.insert(&priced).inspect_err(|e| {
            warn!(faculty_id = %candidate.faculty_id, error = %e, "Store rejected new entry");
        })?;

        info!(
            entry_id = %id,
            faculty_id = %priced.faculty_id,
            work_date = %priced.work_date,
            pay = %priced.pay,
            "Recorded workload entry"
        );

        Ok(RecordedEntry {
            entry: WorkloadEntry::from_priced(id, &priced),
            audit_trace: priced.audit_trace,
        })
    }

    /// Re-validates and replaces an existing entry.
    ///
    /// The candidate is checked against the current same-day snapshot with the
    /// entry's own id excluded, so an entry may keep its time range but cannot
    /// be moved onto a sibling. Returns `EntryNotFound` if the entry does not
    /// exist or belongs to another faculty member.
    pub fn edit_entry(
        &self,
        entry_id: EntryId,
        candidate: &WorkloadCandidate,
    ) -> EngineResult<RecordedEntry> {
        match self.store.entry(entry_id)? {
            Some(stored) if stored.faculty_id == candidate.faculty_id => {}
            _ => return Err(EngineError::EntryNotFound { entry_id }),
        }
        self.require_subject(candidate.subject_id)?;

        let existing = self
            .store
            .entries_for_faculty_on_date(candidate.faculty_id, candidate.work_date)?;
        let priced = validate_and_price(candidate, &existing, Some(entry_id), &self.rates)?;

        if !self.store.replace(entry_id, &priced)? {
            return Err(EngineError::EntryNotFound { entry_id });
        }

        info!(
            entry_id = %entry_id,
            faculty_id = %priced.faculty_id,
            work_date = %priced.work_date,
            pay = %priced.pay,
            "Updated workload entry"
        );

        Ok(RecordedEntry {
            entry: WorkloadEntry::from_priced(entry_id, &priced),
            audit_trace: priced.audit_trace,
        })
    }

    /// Deletes one of a faculty member's entries.
    pub fn delete_entry(&self, faculty_id: FacultyId, entry_id: EntryId) -> EngineResult<()> {
        let owned = matches!(self.store.entry(entry_id)?, Some(stored) if stored.faculty_id == faculty_id);
        if !owned || !self.store.delete(entry_id)? {
            return Err(EngineError::EntryNotFound { entry_id });
        }

        info!(entry_id = %entry_id, faculty_id = %faculty_id, "Deleted workload entry");
        Ok(())
    }

    /// Summarizes a faculty member's entries for a month.
    pub fn monthly_summary(
        &self,
        faculty_id: FacultyId,
        month: BillingMonth,
    ) -> EngineResult<MonthlySummary> {
        let entries = self.store.entries_for_faculty_in_month(faculty_id, month)?;
        Ok(summarize(faculty_id, month, &entries, &self.subject_names()?))
    }

    /// Builds the receipt for a faculty member's month.
    pub fn receipt(&self, faculty_id: FacultyId, month: BillingMonth) -> EngineResult<ReceiptDocument> {
        let faculty = self.require_faculty(faculty_id)?;
        let summary = self.monthly_summary(faculty_id, month)?;
        let document = self.receipts.build_document(&faculty, month, &summary)?;

        info!(
            faculty_id = %faculty_id,
            month = %month,
            rows = document.table.rows.len(),
            total_pay = %document.table.total_pay,
            "Built receipt"
        );
        Ok(document)
    }

    /// Registers a faculty member.
    pub fn add_faculty(&self, faculty: NewFaculty) -> EngineResult<Faculty> {
        for (field, value) in [
            ("name", &faculty.name),
            ("email", &faculty.email),
            ("department", &faculty.department),
        ] {
            require_text(field, value)?;
        }

        let record = self.store.add_faculty(faculty)?;
        info!(faculty_id = %record.id, "Added faculty");
        Ok(record)
    }

    /// Lists every faculty member, ordered by id.
    pub fn list_faculty(&self) -> EngineResult<Vec<Faculty>> {
        Ok(self.store.all_faculty()?)
    }

    /// Finds a faculty member by email, ignoring case.
    pub fn find_faculty_by_email(&self, email: &str) -> EngineResult<Option<Faculty>> {
        let email = email.trim();
        Ok(self
            .store
            .all_faculty()?
            .into_iter()
            .find(|member| member.email.to_lowercase() == email.to_lowercase()))
    }

    /// Deletes a faculty member together with their subjects and entries.
    pub fn delete_faculty(&self, faculty_id: FacultyId) -> EngineResult<()> {
        if !self.store.delete_faculty(faculty_id)? {
            return Err(EngineError::FacultyNotFound { faculty_id });
        }
        info!(faculty_id = %faculty_id, "Deleted faculty");
        Ok(())
    }

    /// Registers a subject for an existing faculty member.
    pub fn add_subject(&self, subject: NewSubject) -> EngineResult<Subject> {
        require_text("name", &subject.name)?;
        self.require_faculty(subject.faculty_id)?;

        let record = self.store.add_subject(subject)?;
        info!(subject_id = %record.id, faculty_id = %record.faculty_id, "Added subject");
        Ok(record)
    }

    /// Lists every subject, ordered by name.
    pub fn list_subjects(&self) -> EngineResult<Vec<Subject>> {
        let mut subjects = self.store.all_subjects()?;
        subjects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(subjects)
    }

    /// Lists one faculty member's subjects, ordered by name.
    pub fn subjects_for_faculty(&self, faculty_id: FacultyId) -> EngineResult<Vec<Subject>> {
        let mut subjects = self.list_subjects()?;
        subjects.retain(|subject| subject.faculty_id == faculty_id);
        Ok(subjects)
    }

    /// Deletes a subject together with its entries.
    pub fn delete_subject(&self, subject_id: SubjectId) -> EngineResult<()> {
        if !self.store.delete_subject(subject_id)? {
            return Err(EngineError::SubjectNotFound { subject_id });
        }
        info!(subject_id = %subject_id, "Deleted subject");
        Ok(())
    }

    /// Lists every entry across all faculty.
    pub fn admin_workload(&self) -> EngineResult<Vec<AdminWorkloadRow>> {
        let entries = self.store.all_entries()?;
        let faculty = self.store.all_faculty()?;
        Ok(admin_listing(&entries, &faculty, &self.subject_names()?))
    }

    /// Computes institution-wide totals.
    pub fn analytics(&self) -> EngineResult<Analytics> {
        let entries = self.store.all_entries()?;
        let faculty = self.store.all_faculty()?;
        Ok(compute_analytics(&faculty, &entries))
    }

    fn require_faculty(&self, faculty_id: FacultyId) -> EngineResult<Faculty> {
        self.store
            .faculty(faculty_id)?
            .ok_or(EngineError::FacultyNotFound { faculty_id })
    }

    fn require_subject(&self, subject_id: SubjectId) -> EngineResult<Subject> {
        self.store
            .subject(subject_id)?
            .ok_or(EngineError::SubjectNotFound { subject_id })
    }

    fn subject_names(&self) -> EngineResult<HashMap<SubjectId, String>> {
        Ok(self
            .store
            .all_subjects()?
            .into_iter()
            .map(|subject| (subject.id, subject.name))
            .collect())
    }
}

fn require_text(field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}
