//! Salary ordering for [`crate::types::Roster`].

use crate::types::{Employee, Roster};

/// Records ordered by ascending salary.
///
/// The sort is stable: records with equal salaries keep their roster order. The roster itself is
/// not modified.
pub fn sort_by_salary(roster: &Roster) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = roster.iter().collect();
    sorted.sort_by_key(|e| e.salary);
    sorted
}

/// `"<name> - <salary><currency>"` with the salary in raw (unrounded) form.
pub fn name_salary(employee: &Employee, currency: &str) -> String {
    format!("{} - {}{}", employee.name, employee.salary, currency)
}
