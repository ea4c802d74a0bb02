//! In-memory views over a [`crate::types::Roster`].
//!
//! The processing layer is purely in-memory and never mutates the roster it reads.
//!
//! - [`map()`]: per-record projection (name–department lines)
//! - [`filter()`]: record filtering (age threshold)
//! - [`reduce()`]: average/max salary, min age, most common department
//! - [`sort_by_salary()`]: stable ascending salary order
//!
//! ## Example
//!
//! ```rust
//! use employee_report::processing::{above_age, average_salary, name_department_projection, sort_by_salary};
//! use employee_report::types::{Employee, Roster};
//!
//! let roster = Roster::new(vec![
//!     Employee::new("Alice", 35, "Eng", "50000".parse().unwrap()),
//!     Employee::new("Bob", 25, "Sales", "40000".parse().unwrap()),
//!     Employee::new("Carol", 40, "Eng", "50000".parse().unwrap()),
//! ]);
//!
//! assert_eq!(name_department_projection(&roster)[1], "Bob - Sales");
//! assert_eq!(average_salary(&roster).rounded().to_string(), "46666.67");
//! assert_eq!(above_age(&roster, 30).len(), 2);
//! assert_eq!(sort_by_salary(&roster)[0].name, "Bob");
//! ```

pub mod filter;
pub mod map;
pub mod reduce;
pub mod sort;

pub use filter::{above_age, filter, name_age, DEFAULT_AGE_THRESHOLD};
pub use map::{map, name_department, name_department_projection};
pub use reduce::{
    average_salary, max_salary, min_age, most_common_department, reduce, ReduceOp, Reduced, Statistics,
};
pub use sort::{name_salary, sort_by_salary};
