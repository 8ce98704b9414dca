//! Identifier newtypes.
//!
//! Ids are assigned by the store and are never reused.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifies a stored workload entry.
    EntryId
);
record_id!(
    /// Identifies a faculty member.
    FacultyId
);
record_id!(
    /// Identifies a subject taught by a faculty member.
    SubjectId
);
