//! Per-record projections for [`crate::types::Roster`].

use crate::types::{Employee, Roster};

/// Returns one value per record by applying `mapper`, in roster order.
///
/// This is a convenience wrapper around [`Roster::map_records`].
pub fn map<T, F>(roster: &Roster, mapper: F) -> Vec<T>
where
    F: FnMut(&Employee) -> T,
{
    roster.map_records(mapper)
}

/// `"<name> - <department>"` for a single record.
pub fn name_department(employee: &Employee) -> String {
    format!("{} - {}", employee.name, employee.department)
}

/// Name–department line for every record, same order and cardinality as the roster.
pub fn name_department_projection(roster: &Roster) -> Vec<String> {
    map(roster, name_department)
}
