//! Reduction operations for [`crate::types::Roster`].
//!
//! Every reduction has a documented value for the empty roster instead of failing:
//! salaries and ages reduce to `0`, the department mode to `None`.

use std::collections::HashMap;

use crate::types::{Roster, Salary, SalarySum};

/// Built-in reductions over the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Mean salary, rounded half-even to cents.
    AverageSalary,
    /// Highest salary.
    MaxSalary,
    /// Lowest age.
    MinAge,
    /// Department with the most records; ties go to the first encountered.
    MostCommonDepartment,
}

/// Result of a [`reduce`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduced<'a> {
    Salary(Salary),
    Age(u32),
    Department(Option<&'a str>),
}

/// Reduce the roster using a built-in [`ReduceOp`].
pub fn reduce(roster: &Roster, op: ReduceOp) -> Reduced<'_> {
    match op {
        ReduceOp::AverageSalary => Reduced::Salary(average_salary(roster)),
        ReduceOp::MaxSalary => Reduced::Salary(max_salary(roster)),
        ReduceOp::MinAge => Reduced::Age(min_age(roster)),
        ReduceOp::MostCommonDepartment => Reduced::Department(most_common_department(roster)),
    }
}

/// Arithmetic mean of all salaries, rounded half-even to two decimal places.
pub fn average_salary(roster: &Roster) -> Salary {
    roster
        .reduce_records(SalarySum::default(), |sum, e| sum.include(e.salary))
        .mean_to_cents()
        .unwrap_or(Salary::ZERO)
}

pub fn max_salary(roster: &Roster) -> Salary {
    roster.iter().map(|e| e.salary).max().unwrap_or(Salary::ZERO)
}

pub fn min_age(roster: &Roster) -> u32 {
    roster.iter().map(|e| e.age).min().unwrap_or(0)
}

/// Department value with the highest record count.
///
/// Among departments sharing the maximal count, the one whose first record appears earliest in
/// the roster wins.
pub fn most_common_department(roster: &Roster) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for e in roster {
        let count = counts.entry(e.department.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(e.department.as_str());
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for dept in first_seen {
        let n = counts[dept];
        if best.is_none_or(|(_, max)| n > max) {
            best = Some((dept, n));
        }
    }
    best.map(|(dept, _)| dept)
}

/// The three summary statistics printed after the age filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub max_salary: Salary,
    pub min_age: u32,
    pub most_common_department: Option<String>,
}

impl Statistics {
    pub fn compute(roster: &Roster) -> Self {
        Self {
            max_salary: max_salary(roster),
            min_age: min_age(roster),
            most_common_department: most_common_department(roster).map(str::to_owned),
        }
    }
}
