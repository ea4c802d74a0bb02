//! Record filtering for [`crate::types::Roster`].

use crate::types::{Employee, Roster};

/// Default age threshold used by the report.
pub const DEFAULT_AGE_THRESHOLD: u32 = 30;

/// Returns the records for which `predicate` returns `true`, in roster order.
///
/// This is a convenience wrapper around [`Roster::filter_records`].
pub fn filter<F>(roster: &Roster, predicate: F) -> Vec<&Employee>
where
    F: FnMut(&Employee) -> bool,
{
    roster.filter_records(predicate)
}

/// Records strictly older than `threshold`.
pub fn above_age(roster: &Roster, threshold: u32) -> Vec<&Employee> {
    filter(roster, |e| e.age > threshold)
}

/// `"<name> - <age>"` for a single record.
pub fn name_age(employee: &Employee) -> String {
    format!("{} - {}", employee.name, employee.age)
}
