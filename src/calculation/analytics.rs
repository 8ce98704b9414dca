//! Institution-wide workload and salary totals.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Analytics, Faculty, FacultyId, FacultySalary, FacultyWorkload, WorkloadEntry};

use super::round_money;

/// Computes institution-wide totals from every faculty member and entry.
///
/// Every faculty member appears in the workload list, including those with no
/// entries. Only faculty with non-zero pay appear in the salary distribution.
/// Both lists are ordered highest first; ties keep faculty id order.
pub fn compute_analytics(faculty: &[Faculty], entries: &[WorkloadEntry]) -> Analytics {
    let mut hours: HashMap<FacultyId, Decimal> = HashMap::new();
    let mut pay: HashMap<FacultyId, Decimal> = HashMap::new();

    for entry in entries {
        *hours.entry(entry.faculty_id).or_default() += entry.duration_hours;
        *pay.entry(entry.faculty_id).or_default() += entry.pay;
    }

    let mut ordered: Vec<&Faculty> = faculty.iter().collect();
    ordered.sort_by_key(|member| member.id);

    let mut faculty_workload: Vec<FacultyWorkload> = ordered
        .iter()
        .map(|member| FacultyWorkload {
            name: member.name.clone(),
            workload: hours.get(&member.id).copied().unwrap_or_default(),
        })
        .collect();
    faculty_workload.sort_by(|a, b| b.workload.cmp(&a.workload));

    let mut salary_distribution: Vec<FacultySalary> = ordered
        .iter()
        .filter_map(|member| {
            let salary = pay.get(&member.id).copied().unwrap_or_default();
            (salary > Decimal::ZERO).then(|| FacultySalary {
                name: member.name.clone(),
                salary,
            })
        })
        .collect();
    salary_distribution.sort_by(|a, b| b.salary.cmp(&a.salary));

    Analytics {
        total_faculty: faculty.len(),
        total_workload_entries: entries.len(),
        total_salary: round_money(entries.iter().map(|entry| entry.pay).sum()),
        faculty_workload,
        salary_distribution,
    }
}
