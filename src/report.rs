//! The five report views and their text rendering.

use std::io::{self, Write};

use crate::error::ReportResult;
use crate::execution::{ExecutionEngine, ExecutionOptions, TracingExecutionObserver};
use crate::processing::{self, Statistics, DEFAULT_AGE_THRESHOLD};
use crate::types::{Roster, Salary};

/// Currency suffix appended to salary values.
pub const DEFAULT_CURRENCY: &str = "€";

/// Text printed when the roster has no departments.
pub const NO_DEPARTMENT: &str = "None";

/// How per-record views are evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// Single-threaded, in roster order.
    #[default]
    Sequential,
    /// On an [`ExecutionEngine`]; results are still collected in roster order.
    Parallel(ExecutionOptions),
}

/// Options controlling how the report is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Records with `age > age_threshold` are listed.
    pub age_threshold: u32,
    /// Suffix appended to every salary value.
    pub currency: String,
    pub evaluation: Evaluation,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            age_threshold: DEFAULT_AGE_THRESHOLD,
            currency: DEFAULT_CURRENCY.to_string(),
            evaluation: Evaluation::default(),
        }
    }
}

/// All report views computed over one roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeReport {
    /// `"<name> - <department>"` per record, roster order.
    pub name_departments: Vec<String>,
    /// Mean salary rounded to cents.
    pub average_salary: Salary,
    pub age_threshold: u32,
    /// `"<name> - <age>"` for records above the threshold, roster order.
    pub above_threshold: Vec<String>,
    pub statistics: Statistics,
    /// `"<name> - <salary><currency>"`, ascending salary, stable.
    pub sorted_by_salary: Vec<String>,
    pub currency: String,
}

impl EmployeeReport {
    /// Compute every view over `roster`.
    ///
    /// Fails only if [`Evaluation::Parallel`] carries invalid execution options.
    pub fn build(roster: &Roster, options: &ReportOptions) -> ReportResult<Self> {
        let currency = options.currency.as_str();
        let threshold = options.age_threshold;

        let (name_departments, above_threshold, sorted_by_salary) = match &options.evaluation {
            Evaluation::Sequential => (
                processing::name_department_projection(roster),
                processing::above_age(roster, threshold)
                    .into_iter()
                    .map(processing::name_age)
                    .collect(),
                processing::sort_by_salary(roster)
                    .into_iter()
                    .map(|e| processing::name_salary(e, currency))
                    .collect(),
            ),
            Evaluation::Parallel(exec) => {
                let engine =
                    ExecutionEngine::new(exec.clone())?.with_observer(std::sync::Arc::new(TracingExecutionObserver));
                (
                    engine.project_parallel(roster, processing::name_department),
                    engine
                        .filter_parallel(roster, |e| e.age > threshold)
                        .into_iter()
                        .map(processing::name_age)
                        .collect(),
                    engine
                        .sort_by_salary_parallel(roster)
                        .into_iter()
                        .map(|e| processing::name_salary(e, currency))
                        .collect(),
                )
            }
        };

        Ok(Self {
            name_departments,
            average_salary: processing::average_salary(roster),
            age_threshold: threshold,
            above_threshold,
            statistics: Statistics::compute(roster),
            sorted_by_salary,
            currency: options.currency.clone(),
        })
    }

    /// Report lines in output order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(
            self.name_departments.len() + self.above_threshold.len() + self.sorted_by_salary.len() + 6,
        );
        lines.extend(self.name_departments.iter().cloned());
        lines.push(format!(
            "Average salary: {}{}",
            self.average_salary.rounded(),
            self.currency
        ));
        lines.push(format!("Employees above age {}:", self.age_threshold));
        lines.extend(self.above_threshold.iter().cloned());
        lines.push(format!(
            "Maximum salary: {}{}",
            self.statistics.max_salary, self.currency
        ));
        lines.push(format!("Minimum age: {}", self.statistics.min_age));
        lines.push(format!(
            "Most common department: {}",
            self.statistics
                .most_common_department
                .as_deref()
                .unwrap_or(NO_DEPARTMENT)
        ));
        lines.push("Employees sorted by salary:".to_string());
        lines.extend(self.sorted_by_salary.iter().cloned());
        lines
    }

    /// Write the report, one line per entry of [`Self::lines`].
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeReport, Evaluation, ReportOptions};
    use crate::execution::ExecutionOptions;
    use crate::types::{Employee, Roster};

    fn scenario() -> Roster {
        Roster::new(vec![
            Employee::new("Alice", 35, "Eng", "50000".parse().unwrap()),
            Employee::new("Bob", 25, "Sales", "40000".parse().unwrap()),
            Employee::new("Carol", 40, "Eng", "50000".parse().unwrap()),
        ])
    }

    const SCENARIO_LINES: &[&str] = &[
        "Alice - Eng",
        "Bob - Sales",
        "Carol - Eng",
        "Average salary: 46666.67€",
        "Employees above age 30:",
        "Alice - 35",
        "Carol - 40",
        "Maximum salary: 50000.0€",
        "Minimum age: 25",
        "Most common department: Eng",
        "Employees sorted by salary:",
        "Bob - 40000.0€",
        "Alice - 50000.0€",
        "Carol - 50000.0€",
    ];

    #[test]
    fn scenario_renders_expected_lines() {
        let report = EmployeeReport::build(&scenario(), &ReportOptions::default()).unwrap();
        assert_eq!(report.lines(), SCENARIO_LINES);

        let mut out = Vec::new();
        report.render(&mut out).unwrap();
        let expected = SCENARIO_LINES.iter().map(|l| format!("{l}\n")).collect::<String>();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn parallel_evaluation_renders_identically() {
        let options = ReportOptions {
            evaluation: Evaluation::Parallel(ExecutionOptions {
                num_threads: Some(2),
                chunk_size: 1,
            }),
            ..Default::default()
        };
        let report = EmployeeReport::build(&scenario(), &options).unwrap();
        assert_eq!(report.lines(), SCENARIO_LINES);
    }

    #[test]
    fn empty_roster_renders_defaults() {
        let report = EmployeeReport::build(&Roster::default(), &ReportOptions::default()).unwrap();
        assert_eq!(
            report.lines(),
            vec![
                "Average salary: 0€",
                "Employees above age 30:",
                "Maximum salary: 0.0€",
                "Minimum age: 0",
                "Most common department: None",
                "Employees sorted by salary:",
            ]
        );
    }

    #[test]
    fn threshold_and_currency_are_configurable() {
        let options = ReportOptions {
            age_threshold: 35,
            currency: " EUR".to_string(),
            ..Default::default()
        };
        let report = EmployeeReport::build(&scenario(), &options).unwrap();
        assert_eq!(report.above_threshold, vec!["Carol - 40"]);
        assert!(report.lines().contains(&"Employees above age 35:".to_string()));
        assert_eq!(report.sorted_by_salary[0], "Bob - 40000.0 EUR");
    }

    #[test]
    fn invalid_parallel_options_are_reported() {
        let options = ReportOptions {
            evaluation: Evaluation::Parallel(ExecutionOptions {
                num_threads: Some(1),
                chunk_size: 0,
            }),
            ..Default::default()
        };
        assert!(EmployeeReport::build(&scenario(), &options).is_err());
    }
}
