//! Activity kind model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of teaching work, which drives the rate lookup.
///
/// Names are matched case-insensitively. Any name other than the three known
/// kinds is kept as [`ActivityKind::Other`] so it can still be displayed and
/// priced at the default rate.
///
/// # Example
///
/// ```
/// use faculty_payroll::models::ActivityKind;
///
/// assert_eq!(ActivityKind::from("Lecture"), ActivityKind::Lecture);
/// assert_eq!(ActivityKind::from("seminar"), ActivityKind::Other("seminar".to_string()));
/// assert_eq!(ActivityKind::Lab.display_name(), "Lab");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    /// A lecture.
    Lecture,
    /// A tutorial.
    Tutorial,
    /// A lab session.
    Lab,
    /// Any other kind of activity, by its lower-cased name.
    Other(String),
}

impl ActivityKind {
    /// Returns the lower-cased wire name, also used as the rate table key.
    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Lecture => "lecture",
            ActivityKind::Tutorial => "tutorial",
            ActivityKind::Lab => "lab",
            ActivityKind::Other(name) => name,
        }
    }

    /// Returns true if no name was supplied.
    pub fn is_blank(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Returns the name with its first letter upper-cased, for receipts.
    pub fn display_name(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<&str> for ActivityKind {
    fn from(raw: &str) -> Self {
        let name = raw.trim().to_lowercase();
        match name.as_str() {
            "lecture" => ActivityKind::Lecture,
            "tutorial" => ActivityKind::Tutorial,
            "lab" => ActivityKind::Lab,
            _ => ActivityKind::Other(name),
        }
    }
}

impl From<String> for ActivityKind {
    fn from(raw: String) -> Self {
        ActivityKind::from(raw.as_str())
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
