//! Faculty and subject records.

use serde::{Deserialize, Serialize};

use super::{FacultyId, SubjectId};

/// A faculty member whose teaching is paid through this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Store-assigned id.
    pub id: FacultyId,
    /// Full name, as printed on receipts.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Department name.
    pub department: String,
}

/// The fields needed to register a faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFaculty {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Department name.
    pub department: String,
}

/// A subject taught by one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Store-assigned id.
    pub id: SubjectId,
    /// Subject name.
    pub name: String,
    /// The faculty member teaching it.
    pub faculty_id: FacultyId,
}

/// The fields needed to register a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubject {
    /// Subject name.
    pub name: String,
    /// The faculty member teaching it.
    pub faculty_id: FacultyId,
}
